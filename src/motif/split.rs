use super::group::Run;

/// 一个签名片段：两个长通配分隔符之间的若干 run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub runs: Vec<Run>,
}

/// 长度不小于 `x_threshold` 的通配 run 作为分隔符切分 run 序列。
///
/// 分隔符本身丢弃，空片段不输出。调用方保证 `x_threshold >= 1`。
///
/// 片段内部不做首尾裁剪：分隔符旁的 `-` run 会留在片段边缘，两个分隔符之间
/// 只有一列全空位时会单独输出 `-` 片段，不满足 "片段不以纯空位 run 开头或结尾"。
/// 若在此处再裁剪，阈值增大时片段数可能增加（`A x9 - x5 - x9 B`：阈值 5 得 2 段，
/// 阈值 6 得 3 段），与 "阈值单调" 冲突；这里保留单调性。
pub fn split_segments(runs: &[Run], x_threshold: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Vec<Run> = Vec::new();

    for run in runs {
        if run.symbol.is_wildcard() && run.len >= x_threshold {
            log::trace!("separator {} at [{}, {}]", run.token(), run.start, run.end);
            flush(&mut segments, std::mem::take(&mut current));
        } else {
            current.push(run.clone());
        }
    }
    flush(&mut segments, current);
    segments
}

fn flush(segments: &mut Vec<Segment>, runs: Vec<Run>) {
    if !runs.is_empty() {
        segments.push(Segment { runs });
    }
}
