use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io::Write;

use prosite_rs::motif::{self, ConservationModel, SignatureOpt};
use prosite_rs::residue::Catalog;

#[derive(Parser, Debug)]
#[command(name = "prosite-rs", author, version, about = "Derive PROSITE-style signatures from protein alignments", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbosity: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive signature patterns from a FASTA alignment
    Signature {
        /// Aligned protein sequences (FASTA)
        fasta: String,
        /// Conservation model: classification | blosum62
        #[arg(short = 'm', long = "model", default_value = "classification")]
        model: ConservationModel,
        /// Wildcard runs at least this long split the signature
        #[arg(short = 'x', long = "x-threshold", default_value_t = 20,
              value_parser = clap::value_parser!(u32).range(1..))]
        x_threshold: u32,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        /// Write the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the amino-acid reference table
    Catalog,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbosity);
    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli.command) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                buf.default_styled_level(record.level()),
                record.args()
            )
        })
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Signature { fasta, model, x_threshold, threads, out, json } => {
            let opt = SignatureOpt {
                model,
                x_threshold: x_threshold as usize,
                threads,
            };
            run_signature(&fasta, opt, out.as_deref(), json)
        }
        Commands::Catalog => run_catalog(),
    }
}

fn run_signature(fasta_path: &str, opt: SignatureOpt, out_path: Option<&str>, json: bool) -> Result<()> {
    opt.validate()?;

    let text = std::fs::read_to_string(fasta_path)
        .map_err(|e| anyhow::anyhow!("cannot read FASTA '{}': {}", fasta_path, e))?;
    let report = motif::process_fasta(&text, &opt, Catalog::standard())?;
    if report.entries.is_empty() {
        log::warn!("no FASTA records found in '{}'", fasta_path);
    }
    log::info!(
        "{} sequences, {} signatures (model {}, x-threshold {})",
        report.entries.len(),
        report.signatures.len(),
        opt.model,
        opt.x_threshold
    );

    let mut out: Box<dyn Write> = if let Some(p) = out_path {
        let fh = std::fs::File::create(p)
            .map_err(|e| anyhow::anyhow!("cannot create output '{}': {}", p, e))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        for pattern in report.patterns() {
            writeln!(out, "{}", pattern)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_catalog() -> Result<()> {
    let mut out = std::io::BufWriter::new(std::io::stdout());
    for aa in Catalog::standard().amino_acids() {
        writeln!(out, "{}", aa.describe())?;
    }
    out.flush()?;
    Ok(())
}
