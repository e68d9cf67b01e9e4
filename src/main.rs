//! SafeArea - Safe-area inset resolution
//!
//! Command-line front end for classifying screens and resolving padding.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use safearea::config::{self, Config, ConfigError, InsetOverride, InsetOverrideConfig};
use safearea::model::{
    self, DeviceClass, EdgeTouchFlags, MeasuredRect, Orientation, Platform, ResolvedPadding,
    ScreenDimensions,
};
use safearea::view::{Host, LayoutEvent, SafeAreaEvent, SafeAreaView, SimulatedHost, ViewHandle};
use safearea::screen::has_notch;
use safearea::{classify, detect_touches, resolve};

/// SafeArea - Safe-area insets for notched screens
#[derive(Parser)]
#[command(name = "safearea")]
#[command(author = "SafeArea Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Compute safe-area padding for mobile views", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Screen selection shared by several subcommands
#[derive(clap::Args)]
struct ScreenArgs {
    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f64>,

    /// Platform family (ios, android, other)
    #[arg(long)]
    platform: Option<Platform>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a screen
    Classify {
        #[command(flatten)]
        screen: ScreenArgs,
    },

    /// Resolve padding for a measured view
    Resolve {
        #[command(flatten)]
        screen: ScreenArgs,

        /// View x offset in window coordinates
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        /// View y offset in window coordinates
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,

        /// View width (defaults to the window width)
        #[arg(long)]
        view_width: Option<f64>,

        /// View height (defaults to the window height)
        #[arg(long)]
        view_height: Option<f64>,

        /// Inset override, e.g. bottom=never or horizontal=12
        #[arg(long = "inset", value_name = "KEY=VALUE")]
        insets: Vec<String>,
    },

    /// Run a simulated view through a series of rotations
    Simulate {
        #[command(flatten)]
        screen: ScreenArgs,

        /// Number of rotations to perform
        #[arg(short, long, default_value_t = 2)]
        rotations: u32,

        /// Inset override, e.g. bottom=never or horizontal=12
        #[arg(long = "inset", value_name = "KEY=VALUE")]
        insets: Vec<String>,
    },

    /// Show current configuration
    Config {
        /// Generate sample configuration
        #[arg(long)]
        generate: bool,

        /// Output path for generated config
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show reference screen information
    Info,
}

#[derive(Serialize)]
struct ClassifyReport {
    dimensions: ScreenDimensions,
    platform: Platform,
    device_class: DeviceClass,
    orientation: Orientation,
    has_notch: bool,
}

#[derive(Serialize)]
struct ResolveReport {
    device_class: DeviceClass,
    orientation: Orientation,
    measured: MeasuredRect,
    touches: EdgeTouchFlags,
    padding: ResolvedPadding,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Provisional logging while the configuration is read
    let provisional = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(if cli.verbose { "debug" } else { "info" }))
        .finish();
    let candidates: Vec<PathBuf> = Config::default_paths().into_iter().flatten().collect();
    let (config, discarded) = tracing::subscriber::with_default(provisional, || {
        load_config(cli.config.as_deref(), &candidates)
    })?;

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(config.log_filter())
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(e) = discarded {
        tracing::warn!("Ignoring unreadable configuration, using defaults: {}", e);
    }

    match cli.command {
        Commands::Classify { screen } => {
            run_classify(&config, &screen, cli.json)?;
        }
        Commands::Resolve {
            screen,
            x,
            y,
            view_width,
            view_height,
            insets,
        } => {
            let (dims, platform) = screen_from(&config, &screen);
            let overrides = merge_overrides(&config, &insets)?;
            let measured = MeasuredRect::new(
                x,
                y,
                view_width.unwrap_or(dims.width),
                view_height.unwrap_or(dims.height),
            );
            run_resolve(dims, platform, measured, &overrides, cli.json)?;
        }
        Commands::Simulate {
            screen,
            rotations,
            insets,
        } => {
            let (dims, platform) = screen_from(&config, &screen);
            let overrides = merge_overrides(&config, &insets)?;
            run_simulation(dims, platform, overrides, rotations).await?;
        }
        Commands::Config { generate, output } => {
            if generate {
                let sample = config::generate_sample_config()?;
                if let Some(path) = output {
                    std::fs::write(&path, &sample)?;
                    println!("Configuration written to: {}", path.display());
                } else {
                    println!("{}", sample);
                }
            } else {
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }
        Commands::Info => {
            print_reference_info();
        }
    }

    Ok(())
}

/// Load the explicit config file, or the first default candidate.
///
/// A broken default file falls back to defaults and is returned for reporting;
/// a broken explicit file is an error.
fn load_config(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
) -> anyhow::Result<(Config, Option<ConfigError>)> {
    if let Some(path) = explicit {
        return Ok((Config::load(path)?, None));
    }

    match Config::load_first(candidates) {
        Ok(config) => Ok((config, None)),
        Err(e) => Ok((Config::default(), Some(e))),
    }
}

/// Combine config file screen settings with command-line overrides
fn screen_from(config: &Config, args: &ScreenArgs) -> (ScreenDimensions, Platform) {
    let base = config.screen.dimensions_or(model::reference_span(Orientation::Portrait));
    let dims = ScreenDimensions::new(
        args.width.unwrap_or(base.width),
        args.height.unwrap_or(base.height),
    );
    (dims, args.platform.unwrap_or(config.screen.platform))
}

/// Layer `KEY=VALUE` pairs over the config file's inset table
fn merge_overrides(config: &Config, pairs: &[String]) -> anyhow::Result<InsetOverrideConfig> {
    let mut overrides = config.insets.clone();

    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            anyhow::bail!("Invalid inset override '{}', expected KEY=VALUE", pair);
        };
        let value: InsetOverride = value.parse().map_err(anyhow::Error::msg)?;

        if !overrides.set_named(key.trim(), value) {
            tracing::warn!("Ignoring unknown inset key '{}'", key);
        }
    }

    Ok(overrides)
}

fn run_classify(config: &Config, args: &ScreenArgs, json: bool) -> anyhow::Result<()> {
    let (dims, platform) = screen_from(config, args);
    let device_class = classify(dims, platform);

    let report = ClassifyReport {
        dimensions: dims,
        platform,
        device_class,
        orientation: dims.orientation(),
        has_notch: has_notch(dims, platform),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Screen: {}x{} ({})", dims.width, dims.height, platform);
        println!("Device class: {}", report.device_class);
        println!("Orientation: {}", report.orientation);
        println!("Notch: {}", if report.has_notch { "yes" } else { "no" });
    }

    Ok(())
}

fn run_resolve(
    dims: ScreenDimensions,
    platform: Platform,
    measured: MeasuredRect,
    overrides: &InsetOverrideConfig,
    json: bool,
) -> anyhow::Result<()> {
    let device_class = classify(dims, platform);
    let orientation = dims.orientation();
    let touches = detect_touches(measured, orientation);
    let padding = if platform.has_safe_area_insets() {
        resolve(touches, device_class, orientation, Some(overrides))
    } else {
        ResolvedPadding::ZERO
    };

    tracing::debug!("Touches for {:?}: {:?}", measured, touches);

    let report = ResolveReport {
        device_class,
        orientation,
        measured,
        touches,
        padding,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Device class: {} ({})", device_class, orientation);
        println!(
            "View: {}x{} at ({}, {})",
            measured.width, measured.height, measured.x, measured.y
        );
        println!("Padding: {}", padding);
    }

    Ok(())
}

/// Drive a simulated host through the reactive controller
async fn run_simulation(
    dims: ScreenDimensions,
    platform: Platform,
    overrides: InsetOverrideConfig,
    rotations: u32,
) -> anyhow::Result<()> {
    let host = Arc::new(SimulatedHost::new(platform, dims));
    let mut view = SafeAreaView::new(host.clone(), overrides);
    let mut events = view
        .take_event_receiver()
        .ok_or_else(|| anyhow::anyhow!("event receiver already taken"))?;
    view.attach(ViewHandle(1));

    tracing::info!(
        "Simulating {} view on {}x{}",
        platform,
        dims.width,
        dims.height
    );
    println!("Initial padding: {}", view.padding());

    if view.handle_event(LayoutEvent::Ready) {
        view.settle().await;
    }

    for step in 0..=rotations {
        if step > 0 {
            host.rotate();
            let current = host.window_dimensions();
            println!("Rotated to {}x{}", current.width, current.height);
        }

        // A second pass in the same orientation must not remeasure
        for event in [LayoutEvent::LayoutChanged, LayoutEvent::LayoutChanged] {
            if view.handle_event(event) {
                view.settle().await;
            }
        }

        while let Ok(event) = events.try_recv() {
            match event {
                SafeAreaEvent::PaddingChanged {
                    padding,
                    orientation,
                } => println!("  {}: {}", orientation, padding),
                SafeAreaEvent::MeasurementFailed { message } => {
                    println!("  measurement failed: {}", message)
                }
            }
        }
    }

    println!("Measurements: {}", host.measure_count());
    Ok(())
}

/// Print reference screen information
fn print_reference_info() {
    println!("SafeArea Reference Screens");
    println!("==========================\n");

    println!(
        "Notched phone: {}x{}",
        model::NOTCHED_PHONE_WIDTH,
        model::NOTCHED_PHONE_HEIGHT
    );
    println!("Tablet short edge: >= {}", model::TABLET_SHORT_EDGE);

    println!("\nInsets (portrait / landscape):");
    for key in model::InsetKey::ALL {
        println!(
            "  {:<10} {:>4} / {:>4}",
            key.as_str(),
            safearea::inset_for(key, DeviceClass::NotchedPhone, Orientation::Portrait),
            safearea::inset_for(key, DeviceClass::NotchedPhone, Orientation::Landscape),
        );
    }

    println!("\nConfig search path:");
    for path in Config::default_paths().iter().flatten() {
        println!("  {}", path.display());
    }
}
