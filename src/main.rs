//! ogscore command-line entry point.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use ogscore::{analyze_seo, extract_domain, is_valid_url, normalize_url, resolve_url, OgData, SeoReport};

#[derive(Parser)]
#[command(name = "ogscore")]
#[command(version, about = "Check URLs and score Open Graph metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a URL would be accepted
    Validate {
        url: String,
    },

    /// Print the normalized form of a URL
    Normalize {
        url: String,
    },

    /// Print the hostname of a URL
    Domain {
        url: String,
    },

    /// Resolve a possibly relative URL against a base
    Resolve {
        relative: String,
        base: String,
    },

    /// Grade Open Graph metadata and print the SEO report
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Read the metadata from a JSON file instead of flags
    #[arg(short, long, conflicts_with_all = ["title", "description", "image", "url", "site_name", "og_type", "final_url"])]
    input: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// og:image, resolved against --final-url when relative
    #[arg(long)]
    image: Option<String>,

    /// Canonical og:url
    #[arg(long)]
    url: Option<String>,

    #[arg(long)]
    site_name: Option<String>,

    #[arg(long = "type")]
    og_type: Option<String>,

    /// URL reached after redirects
    #[arg(long)]
    final_url: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { url } => {
            if is_valid_url(&url) {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Normalize { url } => match normalize_url(&url) {
            Ok(normalized) => {
                println!("{}", normalized);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", e);
                Ok(ExitCode::FAILURE)
            }
        },
        Commands::Domain { url } => {
            println!("{}", extract_domain(&url));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { relative, base } => {
            let resolved = resolve_url(&relative, &base);
            if resolved.is_fallback() {
                tracing::warn!(%relative, %base, "could not resolve, printing input unchanged");
            }
            println!("{}", resolved);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Analyze(args) => analyze(args),
    }
}

fn analyze(args: AnalyzeArgs) -> Result<ExitCode> {
    let data = match &args.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<OgData>(&raw)
                .with_context(|| format!("Failed to parse metadata in {}", path.display()))?
        }
        None => OgData {
            title: args.title,
            description: args.description,
            image: args.image,
            url: args.url,
            site_name: args.site_name,
            og_type: args.og_type,
            final_url: args.final_url,
        },
    };

    let data = match data.final_url.clone() {
        Some(base) => data.with_resolved_image(&base),
        None => data,
    };

    let report = analyze_seo(&data);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &SeoReport) {
    println!(
        "SEO score: {}/100 ({}), overall: {}",
        report.numeric_score,
        report.rating(),
        report.overall_score
    );
    println!();

    for row in report.breakdown() {
        println!(
            "  {:<12} {:<8} {:>3} x {:.2} = {:>5.1}",
            row.dimension.label(),
            row.status.as_str(),
            row.score,
            row.weight,
            row.contribution
        );
    }
    println!();

    println!("Title ({} chars): {}", report.title.length, report.title.recommendation);
    println!(
        "Description ({} chars): {}",
        report.description.length, report.description.recommendation
    );
    println!("Image: {}", report.image.recommendation);
    println!("URL: {}", report.url.recommendation);
    println!("Keywords: {}", report.keywords.analysis);

    if !report.keywords.suggested.is_empty() {
        println!("Suggested keywords: {}", report.keywords.suggested.join(", "));
    }
}
