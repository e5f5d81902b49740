use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use serde::Serialize;

use diferencilo::config::{Config, OutputFormat};
use diferencilo::fmt::{self, Style};
use diferencilo::{Calculator, Date, Difference, Session, logging, try_compute};

#[derive(Debug, Parser)]
#[command(name = "diferencilo")]
#[command(about = "Calculate the difference between two dates")]
struct Cli {
    /// Start date, YYYY-MM-DD [default: one year before today]
    start: Option<String>,

    /// End date, YYYY-MM-DD [default: today]
    end: Option<String>,

    /// Count the end day as well
    #[arg(short, long)]
    include_end_date: bool,

    /// Do not count the end day, even if the configuration file does
    #[arg(long, conflicts_with = "include_end_date")]
    exclude_end_date: bool,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from standard input and print the result after each
    #[arg(long)]
    interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    start: &'a str,
    end: &'a str,
    include_end_date: bool,
    summary: String,
    #[serde(flatten)]
    difference: Difference,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!("CLI arguments: {:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> diferencilo::error::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let include_end_date = match (cli.include_end_date, cli.exclude_end_date) {
        (true, _) => true,
        (_, true) => false,
        _ => config.calculation.include_end_date,
    };
    let format = cli.format.unwrap_or(config.output.format);
    let style = config.output.style();

    let defaults = Calculator::new(today()?);
    let start = cli.start.as_deref().unwrap_or(defaults.start());
    let end = cli.end.as_deref().unwrap_or(defaults.end());

    if cli.interactive {
        let calc = Calculator::with_inputs(start, end, include_end_date);
        let mut session = Session::new(calc, style);
        return session.run(io::stdin().lock(), io::stdout().lock());
    }

    let diff = try_compute(start, end, include_end_date)?;
    tracing::debug!(%start, %end, include_end_date, ?diff, "computed");
    write_result(start, end, include_end_date, &diff, format, &style)
}

fn write_result(
    start: &str,
    end: &str,
    include_end_date: bool,
    diff: &Difference,
    format: OutputFormat,
    style: &Style,
) -> diferencilo::error::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", fmt::report(diff, style)),
        OutputFormat::Json => {
            let output = JsonOutput {
                start,
                end,
                include_end_date,
                summary: fmt::summary(diff),
                difference: *diff,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn today() -> diferencilo::error::Result<Date> {
    to_date(chrono::Local::now().date_naive())
}

fn to_date(date: NaiveDate) -> diferencilo::error::Result<Date> {
    Date::from_gregorian(date.year(), date.month() as i32, date.day() as i32)
        .ok_or_else(|| diferencilo::error::Error::UnsupportedDate(date.to_string()))
}
