use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::Parser;

use crate::domain::{assemble, filter_by_min_yield, ListingRecord};
use crate::errors::AppError;
use crate::fetch::{source_id, PageFetcher};

mod domain;
mod errors;
mod export;
mod extract;
mod fetch;


#[derive(Parser)]
#[command(name = "murscan")]
#[command(about = "Extracts financials from commercial real-estate listings and filters by yield")]
struct Cli {
    /// File with one listing URL per line (reads stdin when omitted)
    urls: Option<PathBuf>,

    /// Minimum gross or net yield (%) a record must reach to be kept
    #[arg(long, default_value_t = 8.0)]
    min_yield: f64,

    /// Politeness delay between requests, in seconds
    #[arg(long, default_value_t = 1.0)]
    throttle: f64,

    /// Write the filtered records as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the filtered records as an XLSX workbook
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Write the filtered records as JSON lines
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let urls = read_urls(cli.urls.as_deref())?;
    if urls.is_empty() {
        eprintln!("No URLs to process.");
        return Ok(());
    }

    let fetcher = PageFetcher::new().map_err(|e| AppError::Fetch(e.to_string()))?;
    let throttle = Duration::from_secs_f64(cli.throttle.max(0.0));

    let mut records = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        let source = source_id(url);
        eprintln!("📄 [{}/{}] {url}", i + 1, urls.len());

        let outcome = fetcher.fetch(url);
        records.push(assemble(&source, url, &outcome));

        // Politeness delay between page requests; the last page needs none.
        if i + 1 < urls.len() {
            thread::sleep(throttle);
        }
    }

    let kept = filter_by_min_yield(records, cli.min_yield);
    eprintln!("✅ {} record(s) at or above {} %", kept.len(), cli.min_yield);

    for record in &kept {
        print_summary(record);
    }

    if let Some(path) = &cli.csv {
        fs::write(path, export::csv::to_csv(&kept)).map_err(|e| AppError::Io(e.to_string()))?;
        eprintln!("💾 CSV written to {}", path.display());
    }
    if let Some(path) = &cli.xlsx {
        export::xlsx::export_records_xlsx(&kept, path)?;
        eprintln!("💾 XLSX written to {}", path.display());
    }
    if let Some(path) = &cli.json {
        fs::write(path, export::json::to_json_lines(&kept)?)
            .map_err(|e| AppError::Io(e.to_string()))?;
        eprintln!("💾 JSON written to {}", path.display());
    }

    Ok(())
}

fn read_urls(path: Option<&Path>) -> Result<Vec<String>, AppError> {
    let raw = match path {
        Some(p) => {
            fs::read_to_string(p).map_err(|e| AppError::Io(format!("{}: {e}", p.display())))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AppError::Io(e.to_string()))?;
            buf
        }
    };

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn print_summary(record: &ListingRecord) {
    let show = |v: Option<f64>| match v {
        Some(x) => format!("{x}"),
        None => "-".to_string(),
    };

    println!(
        "{} | prix {} | loyer {} | brut {} % | net {} %{}",
        record.source_id,
        show(record.price_amount),
        show(record.annual_rent),
        show(record.gross_yield_pct),
        show(record.net_yield_pct),
        record
            .extraction_note
            .as_deref()
            .map(|n| format!(" | {n}"))
            .unwrap_or_default(),
    );
}
