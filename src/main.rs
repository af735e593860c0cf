use std::{
    fs::File,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use itertools::Itertools;

mod csv;
mod domain;
mod error;
mod render;

use domain::report::{Config, Report};
use error::{Error, Result};
use render::Detail;

/// Name of the currency-data file downloaded from App Store Connect's
/// "Payments & Financial Reports" page, expected next to the sales reports.
const RATE_FILE_NAME: &str = "financial_report.csv";

/// Splits App Store Connect financial reports by the Apple legal entities
/// accountable for the sales listed in them.
#[derive(Parser)]
struct Args {
    /// Directory containing App Store Connect financial reports (*_CC.txt)
    /// and a financial_report.csv with matching currency data
    directory: PathBuf,
    /// Omit the per-country subtotal lines
    #[arg(long, conflicts_with = "only_subtotals")]
    no_subtotals: bool,
    /// Only print per-country subtotals (skip the per-line conversion)
    #[arg(long)]
    only_subtotals: bool,
    /// ISO code of the currency foreign sales amounts are converted into
    #[arg(long, default_value = "EUR")]
    home_currency: String,
    /// Fractional digits of per-line converted amounts
    #[arg(long, default_value_t = 4)]
    precision_detail: u32,
    /// Fractional digits of subtotals and totals
    #[arg(long, default_value_t = 2)]
    precision_total: u32,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let sales_files = discover_sales_reports(&args.directory)?;
    let rate_file = args.directory.join(RATE_FILE_NAME);
    let config = Config {
        home_currency: args.home_currency.clone(),
        precision_detail: args.precision_detail,
        precision_total: args.precision_total,
    };
    let detail = if args.no_subtotals {
        Detail::NoSubtotals
    } else if args.only_subtotals {
        Detail::OnlySubtotals
    } else {
        Detail::Full
    };

    let report = generate_report(&sales_files, &rate_file, &config, detail)?;

    match &args.output {
        Some(path) => File::create(path)?.write_all(report.as_bytes())?,
        None => print!("{report}"),
    }
    Ok(())
}

/// The whole pipeline: parse the rate file and every sales report, join and
/// aggregate by subsidiary, render the report text. Any failure aborts
/// before a single byte of report text exists.
fn generate_report(
    sales_files: &[PathBuf],
    rate_file: &Path,
    config: &Config,
    detail: Detail,
) -> Result<String> {
    let rates = match File::open(rate_file) {
        Ok(file) => csv::read_rates(file, &rate_file.display().to_string())?,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            return Err(Error::ConfigurationError(format!(
                "currency data file missing: \"{}\" - download it from App Store Connect's \"Payments & Financial Reports\" page",
                rate_file.display()
            )))
        }
        Err(error) => return Err(error.into()),
    };

    let mut sales = Vec::new();
    for path in sales_files {
        let file = File::open(path)?;
        sales.extend(csv::read_sales(file, &path.display().to_string())?);
    }

    let report = Report::build(sales, &rates, config)?;
    Ok(render::render(&report, config, detail))
}

/// Find the sales reports (files named like "..._CC.txt") in the given
/// directory, in name order so reruns read them identically.
fn discover_sales_reports(directory: &Path) -> Result<Vec<PathBuf>> {
    let reports: Vec<PathBuf> = directory
        .read_dir()?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| is_sales_report(path))
        .sorted()
        .collect();

    if reports.is_empty() {
        return Err(Error::ConfigurationError(format!(
            "no App Store Connect financial reports (*.txt) found in {}",
            directory.display()
        )));
    }
    Ok(reports)
}

fn is_sales_report(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(".txt"))
        .is_some_and(|stem| {
            let mut tail = stem.chars().rev();
            matches!(
                (tail.next(), tail.next(), tail.next()),
                (Some(second), Some(first), Some('_'))
                    if first.is_ascii_uppercase() && second.is_ascii_uppercase()
            )
        })
}
