//! mozartway-optimize: converts the landing page's JPEG/PNG screenshots into
//! WebP files no wider than the layout ever shows them.

mod convert;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use convert::{Outcome, Summary};

#[derive(Parser)]
#[command(name = "mozartway-optimize")]
#[command(version)]
#[command(about = "Convert JPEG/PNG images to WebP, capping their width")]
struct Cli {
    /// Directory holding the source images (not searched recursively),
    /// relative to the workspace root by default
    #[arg(short, long, default_value = "web/public/images")]
    dir: PathBuf,

    /// Maximum output width in pixels; narrower images keep their size
    #[arg(short = 'w', long, default_value_t = convert::DEFAULT_MAX_WIDTH)]
    max_width: u32,
}

fn kib(bytes: u64) -> String {
    format!("{:.0} KB", bytes as f64 / 1024.0)
}

fn mib(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let files = convert::scan(&cli.dir)?;
    println!("Found {} images to optimize\n", files.len());

    let mut summary = Summary::default();
    for source in &files {
        let name = convert::display_name(source);
        let report = convert::process_file(source, cli.max_width);
        match &report {
            Outcome::Skipped { webp, .. } => {
                println!("Skipping {name} - WebP already exists ({})", kib(*webp));
            }
            Outcome::Converted {
                original,
                webp,
                resized,
            } => {
                println!("Processing: {name} ({})", mib(*original));
                let saved = convert::saved_percent(*original, *webp)
                    .map(|pct| format!("{pct:.0}%"))
                    .unwrap_or_else(|| "n/a".to_string());
                let note = if *resized { ", resized" } else { "" };
                println!("  -> WebP: {} (saved {saved}{note})\n", kib(*webp));
            }
            Outcome::Failed(err) => {
                eprintln!("  Error processing {name}: {err:#}\n");
            }
        }
        summary.record(&report);
    }

    println!("{}", "=".repeat(50));
    println!("Total original:  {}", mib(summary.total_original));
    println!("Total WebP:      {}", mib(summary.total_webp));
    match summary.saved_percent() {
        Some(pct) => println!("Total saved:     {pct:.0}%"),
        None => println!("Total saved:     n/a"),
    }
    if summary.failed > 0 {
        eprintln!("{} file(s) failed", summary.failed);
    }
    Ok(())
}
