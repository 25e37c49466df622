use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use htr_align::{
    align_indexed_document, detail_records, read_index, write_match_report, write_summary_report,
    AlignConfig, DocumentAlignerBuilder, SummaryRecord, TournamentResult,
};

#[derive(Debug, Parser)]
#[command(name = "cer_report")]
#[command(about = "Align recognized text lines against reference transcriptions and report CER")]
struct Args {
    /// Semicolon-delimited dataset index (doc_id;lines_path;ref_path).
    #[arg(long)]
    index: PathBuf,
    /// Process only the document with this identifier.
    #[arg(long)]
    doc_id: Option<String>,
    /// Comma-separated window-buffer sizes to try, e.g. "400,2000".
    #[arg(long, default_value = "400")]
    window_buffers: String,
    /// Summary CSV destination.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Detailed per-line matches CSV destination.
    #[arg(long)]
    match_output: Option<PathBuf>,
    /// Log per-document progress details.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // A malformed buffer list is fatal before any document is touched.
    let window_buffers = parse_window_buffers(&args.window_buffers)?;

    let config = AlignConfig {
        window_buffers,
        ..AlignConfig::default()
    };
    let aligner = DocumentAlignerBuilder::new(config).build()?;

    let records = read_index(&args.index)?;
    println!("Read {} index records from {}", records.len(), args.index.display());
    println!("Testing window buffers: {:?}", aligner.window_buffers());

    let progress = ProgressBar::new(records.len() as u64).with_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut results: Vec<TournamentResult> = Vec::new();
    for record in &records {
        progress.set_message(record.doc_id.clone());
        if args
            .doc_id
            .as_deref()
            .map_or(false, |id| record.doc_id != id)
        {
            progress.inc(1);
            continue;
        }
        if let Some(result) = align_indexed_document(record, &aligner) {
            if args.verbose {
                let stats = &result.alignment.stats;
                progress.println(format!(
                    "[{}] window {} | matches {}/{} | CER {:.2}%",
                    result.doc_id,
                    result.alignment.window_buffer,
                    stats.lines_used,
                    stats.total_lines,
                    stats.global_cer * 100.0,
                ));
            }
            results.push(result);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if let Some(output) = &args.output {
        let summaries: Vec<SummaryRecord> =
            results.iter().map(SummaryRecord::from_result).collect();
        write_summary_report(output, &summaries)?;
        println!("Wrote summary for {} documents to {}", summaries.len(), output.display());
    }

    if let Some(match_output) = &args.match_output {
        let details: Vec<_> = results.iter().flat_map(|r| detail_records(r)).collect();
        write_match_report(match_output, &details)?;
        println!("Wrote {} detailed matches to {}", details.len(), match_output.display());
    }

    println!("Done.");
    Ok(())
}

fn parse_window_buffers(raw: &str) -> Result<Vec<usize>, String> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("--window-buffers must be a comma-separated list of integers, got {part:?}"))
        })
        .collect()
}
