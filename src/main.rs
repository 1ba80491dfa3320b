use std::env::temp_dir;
use std::fs;
use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use backtrace::Backtrace;
use clap::Parser;
use dirs::home_dir;

mod command;
mod config;
mod error;
mod grid;
mod mission;
mod orientation;
mod parse;
mod rover;

#[derive(Parser)]
#[clap(version, author, about)]
struct Opts {
    /// First line `width height`, then one `(x, y, O) COMMANDS` per rover
    #[clap(default_value = "input.txt")]
    input: PathBuf,
    #[clap(short, long, default_value = "output.txt")]
    output: PathBuf,
    /// Print results instead of writing the output file
    #[clap(long)]
    stdout: bool,
}

fn init_logging(config: &config::Config) -> Result<()> {
    if !config.debug {
        return Ok(());
    }

    let path = config
        .log_file
        .clone()
        .unwrap_or_else(|| temp_dir().join("rover.log"));
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let writer = Mutex::new(log_file);
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(writer)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = home_dir()
        .and_then(|home| config::parse(home.join(".config/rover/config.toml")).ok())
        .unwrap_or_default();
    init_logging(&config)?;

    panic::set_hook(Box::new(|e| {
        tracing::error!("{:?}", Backtrace::new());
        tracing::error!("{}", e);
    }));

    let opts: Opts = Opts::parse();
    let input = fs::read_to_string(&opts.input)
        .with_context(|| format!("cannot read {}", opts.input.display()))?;
    let outputs = mission::run(input.lines())?;

    if opts.stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for output in &outputs {
            writeln!(out, "{}", output)?;
        }
        return Ok(());
    }

    let mut file = io::BufWriter::new(
        fs::File::create(&opts.output)
            .with_context(|| format!("cannot create {}", opts.output.display()))?,
    );
    for output in &outputs {
        writeln!(file, "{}", output)?;
    }
    file.flush()?;
    Ok(())
}
