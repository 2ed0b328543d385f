use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fleetdesk_core::config::Config;
use fleetdesk_core::display;
use fleetdesk_intake::ParsedPayment;

#[derive(Parser)]
#[command(name = "fleetdesk", about = "FleetDesk — fleet operations toolbox")]
struct Cli {
    /// Write debug logs to /tmp/fleetdesk-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a form-data record (a JSON object file) as a key/value grid.
    Render {
        /// Path to a JSON file holding one form-data object.
        record: PathBuf,
    },
    /// Parse a single payment notification (.eml file).
    ParseEml {
        path: PathBuf,
    },
    /// Parse every .eml file in a directory (config's intake dir when omitted).
    Scan {
        dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fleetdesk-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fleetdesk debug log started — tail -f /tmp/fleetdesk-debug.log");
    }

    let config = Config::load()?;

    match cli.command {
        Command::Render { record } => render(&record, &config),
        Command::ParseEml { path } => parse_eml(&path),
        Command::Scan { dir } => scan(dir, &config),
    }
}

fn render(path: &Path, config: &Config) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading record file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let form = value
        .as_object()
        .context("record file must hold a JSON object")?;

    let rows = display::render_record(form);
    for line in display::render_plain(&rows, &config.display) {
        println!("{line}");
    }
    Ok(())
}

fn parse_eml(path: &Path) -> anyhow::Result<()> {
    match fleetdesk_intake::parse_eml_file(path)? {
        Some(payment) => print_payment(&payment),
        None => println!("No payment parser matched {}", path.display()),
    }
    Ok(())
}

fn scan(dir: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None if !config.intake.eml_dir.is_empty() => PathBuf::from(&config.intake.eml_dir),
        None => anyhow::bail!("no directory given and no intake.eml_dir configured"),
    };

    let mut parsed = 0usize;
    let mut skipped = 0usize;
    for entry in std::fs::read_dir(&dir)
        .with_context(|| format!("reading intake directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("eml") {
            continue;
        }
        match fleetdesk_intake::parse_eml_file(&path) {
            Ok(Some(payment)) if config.intake.sources.contains(&payment.source) => {
                print_payment(&payment);
                println!();
                parsed += 1;
            }
            Ok(_) => {
                tracing::debug!(path = %path.display(), "no enabled parser matched");
                skipped += 1;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read .eml");
                skipped += 1;
            }
        }
    }

    println!("{parsed} parsed, {skipped} skipped");
    Ok(())
}

fn print_payment(payment: &ParsedPayment) {
    println!("Source: {}", payment.source);
    println!("Amount: ${:.2}", payment.amount);
    println!("Sender: {}", payment.sender_name);
    println!(
        "Transaction ID: {}",
        payment.transaction_id.as_deref().unwrap_or("-")
    );
    println!("Memo: {}", payment.memo.as_deref().unwrap_or("-"));
    println!("Date: {}", payment.received_at);
}
