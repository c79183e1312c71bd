//! zcalc - replay key presses or action records through the calculator.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use zcalc::{Config, Key, NumberLocale, Store, parse_keys};

#[derive(Parser)]
#[command(name = "zcalc", version)]
#[command(about = "Four-function keypad calculator", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/zcalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the final state and display as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print the display after every action
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Press keys: 0-9 . + - * ÷ / = AC DEL (e.g. `zcalc keys 12+3=`)
    Keys {
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        keys: Vec<String>,
    },
    /// Replay newline-delimited JSON action records from a file, or `-` for stdin
    Records { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let mut store = Store::new();
    match &cli.command {
        Command::Keys { keys } => {
            let keys = parse_keys(&keys.join(" ")).context("Failed to parse keys")?;
            replay_keys(&mut store, &keys, &config.locale, cli.trace);
        }
        Command::Records { path } => {
            let records = read_input(path)?;
            replay_records(&mut store, &records, &config.locale, cli.trace)?;
        }
    }

    if cli.json {
        let output = serde_json::json!({
            "state": store.state(),
            "display": store.display(&config.locale),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", store.display(&config.locale));
    }

    Ok(())
}

fn replay_keys(store: &mut Store, keys: &[Key], locale: &NumberLocale, trace: bool) {
    for key in keys {
        store.dispatch(&key.action());
        if trace {
            print_step(&key.to_string(), store, locale);
        }
    }
}

fn replay_records(
    store: &mut Store,
    records: &str,
    locale: &NumberLocale,
    trace: bool,
) -> Result<()> {
    for (index, line) in records.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        store
            .dispatch_record(line)
            .with_context(|| format!("Invalid action record on line {}", index + 1))?;
        if trace {
            print_step(line, store, locale);
        }
    }

    Ok(())
}

fn print_step(label: &str, store: &Store, locale: &NumberLocale) {
    let display = store.display(locale);
    println!("{:<6} | {:>24} | {}", label, display.previous, display.current);
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("Failed to read records from stdin")
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read records from {:?}", path))
    }
}
