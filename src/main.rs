use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use data::output::format_summary;
use data::ReportFormat;

pub mod data;
pub mod sheet;

#[derive(Parser)]
#[command(name = "jumpsheet")]
struct Cli {
    #[arg(help = "Jump log to convert (CSV with a header row)")]
    input: PathBuf,

    #[arg(help = "Spreadsheet to write (.xlsx)")]
    output: PathBuf,

    #[arg(
        long = "sheet-name",
        short = 's',
        default_value = sheet::DEFAULT_SHEET_NAME,
        help = "Name of the worksheet in the output file"
    )]
    sheet_name: String,

    #[arg(
        long = "report",
        short = 'r',
        default_value = "plain",
        help = "Summary printed after conversion: plain or json"
    )]
    report: String,
}

pub fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE to default so writing the summary to a broken pipe exits
    // cleanly instead of panicking.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "jumpsheet=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!("Converting {:?} to {:?}", cli.input, cli.output);

    let report = match cli.report.as_str() {
        "plain" => ReportFormat::Plain,
        "json" => ReportFormat::Json,
        other => {
            return Err(anyhow!(
                "Unknown report format: {other}. Valid formats: plain, json"
            ))
        }
    };

    let summary = sheet::convert_file(&cli.input, &cli.output, &cli.sheet_name)?;
    println!("{}", format_summary(&summary, report)?);

    Ok(())
}
