use anyhow::{anyhow, Result};
use std::io::{BufRead, Cursor};
use std::path::Path;

use crate::motif::Entry;

/// Streaming FASTA reader.
///
/// The full header line (without `>`) becomes the entry name. Sequence lines
/// are concatenated with whitespace removed and letters upper-cased; gap
/// characters are kept as-is. Records with an empty name or an empty
/// sequence are skipped, and lines before the first header are ignored.
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<Entry>> {
        loop {
            match self.read_raw()? {
                None => return Ok(None),
                Some((name, seq)) if !name.is_empty() && !seq.is_empty() => {
                    return Ok(Some(Entry { name, seq }));
                }
                Some((name, _)) => log::debug!("skipping FASTA record '{}' with empty name or sequence", name),
            }
        }
    }

    fn read_raw(&mut self) -> Result<Option<(String, Vec<u8>)>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let name = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    break self.buf[1..].trim().to_string();
                }
            }
        };

        // Read sequence lines
        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                self.peek_header = Some(self.buf[1..].trim().to_string());
                break;
            }
            for &b in self.buf.as_bytes() {
                match b {
                    b'\n' | b'\r' | b' ' | b'\t' => {}
                    _ => seq.push(b.to_ascii_uppercase()),
                }
            }
        }

        Ok(Some((name, seq)))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Parse in-memory FASTA text. Input without any `>` header yields no entries.
pub fn parse_fasta(text: &str) -> Result<Vec<Entry>> {
    FastaReader::new(Cursor::new(text.as_bytes())).collect()
}

pub fn read_fasta_file(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow!("cannot open FASTA '{}': {}", path.display(), e))?;
    FastaReader::new(std::io::BufReader::new(fh)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_fasta() {
        let data = b">sp|P1 first\nMKv-LA\n>sp|P2\nMK..\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.name, "sp|P1 first");
        assert_eq!(r1.seq, b"MKV-LA");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.name, "sp|P2");
        assert_eq!(r2.seq, b"MK..");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_crlf_and_wrapped_lines() {
        let data = ">p1 desc\r\nMK r\r\n de\r\n>p2 \r\n G G \r\n";
        let entries = parse_fasta(data).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "p1 desc");
        assert_eq!(entries[0].seq, b"MKRDE");
        assert_eq!(entries[1].name, "p2");
        assert_eq!(entries[1].seq, b"GG");
    }

    #[test]
    fn skips_records_without_name_or_sequence() {
        let data = ">\nMKV\n>empty\n\n>ok\nAC\n>trailing\n";
        let entries = parse_fasta(data).unwrap();
        assert_eq!(entries, vec![Entry::new("ok", "AC")]);
    }

    #[test]
    fn last_record_without_newline() {
        let entries = parse_fasta("junk\n>a\nMK\n>b\nMR").unwrap();
        assert_eq!(entries, vec![Entry::new("a", "MK"), Entry::new("b", "MR")]);
    }

    #[test]
    fn headerless_input_yields_nothing() {
        assert!(parse_fasta("MKVLA\nMKVLA\n").unwrap().is_empty());
        assert!(parse_fasta("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_fasta_file("/nonexistent/input.fa").unwrap_err();
        assert!(err.to_string().contains("cannot open FASTA"));
    }
}
