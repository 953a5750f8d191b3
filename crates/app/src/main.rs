use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, DEFAULT_SWIPE_THRESHOLD_PX, DrillSettings, SettingsError};
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, prelude::*};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidSwipeThreshold { raw: String },
    Settings(SettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidSwipeThreshold { raw } => {
                write!(f, "invalid --swipe-threshold value: {raw}")
            }
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<SettingsError> for ArgsError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    settings: DrillSettings,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> DrillSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--swipe-threshold <px>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --seed             random");
    eprintln!("  --swipe-threshold  {DEFAULT_SWIPE_THRESHOLD_PX}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_SEED, DRILL_SWIPE_THRESHOLD, RUST_LOG");
}

enum Parsed {
    Run(DrillSettings),
    Help,
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_threshold(raw: String) -> Result<f64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSwipeThreshold { raw })
}

/// Flags win over `DRILL_SEED` / `DRILL_SWIPE_THRESHOLD` read through `env`.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Parsed, ArgsError> {
    let mut seed = env("DRILL_SEED").map(parse_seed).transpose()?;
    let mut swipe_threshold = env("DRILL_SWIPE_THRESHOLD")
        .map(parse_threshold)
        .transpose()?
        .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => seed = Some(parse_seed(require_value(args, "--seed")?)?),
            "--swipe-threshold" => {
                swipe_threshold = parse_threshold(require_value(args, "--swipe-threshold")?)?;
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Run(DrillSettings::new(seed, swipe_threshold)?))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = parse_args(&mut argv, |key| std::env::var(key).ok());
    let settings = match parsed.inspect_err(|_| print_usage())? {
        Parsed::Run(settings) => settings,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();
    tracing::info!(
        seed = ?settings.seed(),
        swipe_threshold_px = settings.swipe_threshold_px(),
        "launching drill"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { settings });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Times Tables")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
