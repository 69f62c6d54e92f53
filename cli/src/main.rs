//! soft-rtc - set a software clock and watch it run
//!
//! Sets the clock from the command line, then prints the formatted moment at
//! a fixed interval using the process monotonic clock as the tick source.
//!
//! ```text
//! soft-rtc --date 31-12-2024 --time 11:59:58 --twelve-hour --pm --count 4
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use soft_rtc_core::{ClockConfig, HourMode, MonotonicTicks, SoftRtc, UpdateStrategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(author, version, about = "Software real-time clock demo")]
struct Args {
    /// Date as DD-MM-YYYY (2000-2199)
    #[arg(long)]
    date: String,

    /// Time as HH:MM:SS; the hour is 1-12 with --twelve-hour, else 0-23
    #[arg(long)]
    time: String,

    /// Interpret and display the hour in 12-hour form
    #[arg(long)]
    twelve_hour: bool,

    /// Afternoon half of the day (12-hour form only)
    #[arg(long, requires = "twelve_hour")]
    pm: bool,

    /// JSON clock configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reconstruction strategy, overriding the configuration file
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Delay between printed lines
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Number of lines to print
    #[arg(long, default_value_t = 5)]
    count: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Projection,
    Accumulator,
}

impl From<StrategyArg> for UpdateStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Projection => UpdateStrategy::Projection,
            StrategyArg::Accumulator => UpdateStrategy::Accumulator,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soft_rtc=info,soft_rtc_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ClockConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ClockConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config = config.with_strategy(strategy.into());
    }

    let (day, month, year) = parse_date(&args.date)?;
    let (hour, minute, second) = parse_time(&args.time)?;
    let mode = if args.twelve_hour {
        HourMode::Hour12
    } else {
        HourMode::Hour24
    };

    let mut rtc = SoftRtc::with_config(MonotonicTicks::new(), config).context("building clock")?;
    rtc.enable();
    rtc.write(day, month, year, hour, minute, second, args.pm, mode)
        .context("setting clock")?;
    tracing::info!(strategy = ?rtc.config().strategy, "clock running");

    let interval = Duration::from_millis(args.interval_ms);
    for line in 0..args.count {
        if line > 0 {
            thread::sleep(interval);
        }
        if rtc.config().strategy == UpdateStrategy::Accumulator {
            rtc.advance().context("advancing clock")?;
        }
        println!("{}", rtc.render().context("reading clock")?);
    }
    Ok(())
}

/// `DD-MM-YYYY`
fn parse_date(text: &str) -> Result<(u8, u8, u16)> {
    let parts: Vec<&str> = text.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        bail!("date must be DD-MM-YYYY, got {text:?}");
    };
    Ok((
        day.parse().with_context(|| format!("bad day in {text:?}"))?,
        month.parse().with_context(|| format!("bad month in {text:?}"))?,
        year.parse().with_context(|| format!("bad year in {text:?}"))?,
    ))
}

/// `HH:MM:SS`
fn parse_time(text: &str) -> Result<(u8, u8, u8)> {
    let parts: Vec<&str> = text.split(':').collect();
    let [hour, minute, second] = parts.as_slice() else {
        bail!("time must be HH:MM:SS, got {text:?}");
    };
    Ok((
        hour.parse().with_context(|| format!("bad hour in {text:?}"))?,
        minute.parse().with_context(|| format!("bad minute in {text:?}"))?,
        second.parse().with_context(|| format!("bad second in {text:?}"))?,
    ))
}
