mod directory;
mod export;
mod fetch;
mod parser;

use std::path::Path;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::warn;

#[derive(Parser)]
#[command(name = "bt_scraper", about = "Bulk Transporter cargo tank repair directory scraper")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover state pages, scrape them, and write the combined table (default)
    Run {
        /// Max state pages to scrape (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Output file path
        #[arg(short, long, default_value = export::DEFAULT_OUT_PATH)]
        out: String,
    },
    /// List the state pages linked from the directory landing page
    Links,
    /// Extract records from a single state page and print them
    Page {
        /// Full URL of the state page
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    // No subcommand means the full pipeline.
    let command = cli.command.unwrap_or(Commands::Run {
        limit: None,
        out: export::DEFAULT_OUT_PATH.to_string(),
    });

    let result = match command {
        Commands::Run { limit, out } => {
            let client = fetch::build_client()?;
            let mut pages = directory::fetch_state_urls(&client).await?;
            if pages.is_empty() {
                println!("No state pages found on the landing page.");
                return Ok(());
            }
            if let Some(n) = limit {
                pages.truncate(n);
            }

            println!("Scraping {} state pages...", pages.len());
            let t_fetch = Instant::now();
            let fetched = fetch::fetch_pages(&client, pages).await?;
            println!(
                "Fetched {} pages in {:.1}s",
                fetched.len(),
                t_fetch.elapsed().as_secs_f64()
            );

            let batches = extract_batches(&fetched);
            let total: usize = batches.iter().map(|b| b.len()).sum();
            println!("Extracted {} records.", total);

            let written = export::write_table(&batches, Path::new(&out))?;
            println!("Wrote {} rows to {}", written, out);
            Ok(())
        }
        Commands::Links => {
            let client = fetch::build_client()?;
            let pages = directory::fetch_state_urls(&client).await?;
            if pages.is_empty() {
                println!("No state pages found on the landing page.");
                return Ok(());
            }
            for (i, (url, slug)) in pages.iter().enumerate() {
                println!("{:>3} {:<24} {}", i + 1, slug, url);
            }
            println!("\n{} state pages", pages.len());
            Ok(())
        }
        Commands::Page { url } => {
            let client = fetch::build_client()?;
            let html = fetch::get_with_retry(&client, &url).await?;
            let records = parser::extract_records(&html);
            if records.is_empty() {
                println!("No records found on {}", url);
                return Ok(());
            }

            // Compact, readable table
            println!(
                "{:>3} | {:<28} | {:<24} | {:<14} | {:>5} | {:<14} | {:<12}",
                "#", "Company", "Address", "City", "Zip", "Phone", "Fax"
            );
            println!("{}", "-".repeat(118));

            for (i, r) in records.iter().enumerate() {
                println!(
                    "{:>3} | {:<28} | {:<24} | {:<14} | {:>5} | {:<14} | {:<12}",
                    i + 1,
                    truncate(&r.company, 28),
                    truncate(r.address.as_deref().unwrap_or("-"), 24),
                    truncate(&r.city, 14),
                    r.zip.as_deref().unwrap_or("-"),
                    truncate(&r.phone, 14),
                    truncate(&r.fax, 12),
                );
            }

            // Services are long free text; keep them out of the table
            let with_services: Vec<_> = records.iter().filter(|r| r.services.is_some()).collect();
            if !with_services.is_empty() {
                println!("\n--- Services ---");
                for r in &with_services {
                    println!(
                        "  {}: {}",
                        truncate(&r.company, 24),
                        r.services.as_deref().unwrap_or("")
                    );
                }
            }

            println!("\n{} records", records.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Parse every fetched page, keeping batch order aligned with fetch order.
fn extract_batches(fetched: &[fetch::FetchedPage]) -> Vec<Vec<export::Record>> {
    use rayon::prelude::*;

    let batches: Vec<Vec<export::Record>> = fetched
        .par_iter()
        .map(|page| parser::extract_records(&page.html))
        .collect();

    for (page, batch) in fetched.iter().zip(&batches) {
        if batch.is_empty() {
            warn!("No records extracted from {} ({})", page.slug, page.url);
        }
    }

    batches
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
