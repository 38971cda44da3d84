//! roi-calc CLI
//!
//! Estimate the savings and ROI of automating data-management work.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roi_calc::config::{default_config_path, load_config, Config};
use roi_calc::error::Result;
use roi_calc::inputs::InputState;
use roi_calc::report::format_report;
use roi_calc::types::{OutputFormat, ThemeName};

#[derive(Parser)]
#[command(name = "roi-calc")]
#[command(about = "Estimate savings and ROI from data-management overhead")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "ROI_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an estimate for the given inputs
    Estimate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Open the interactive calculator
    Ui {
        /// Visual theme (default: from config)
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Show the config file location and effective settings
    Config,
}

/// Input overrides. Anything left unset comes from config, then defaults.
#[derive(Args)]
struct InputArgs {
    /// Number of data sources
    #[arg(long, allow_negative_numbers = true)]
    data_sources: Option<i64>,

    /// Hours per week spent managing data (1-80)
    #[arg(long, allow_negative_numbers = true)]
    hours_per_week: Option<i64>,

    /// Fully-loaded hourly cost in EUR (20-200)
    #[arg(long, allow_negative_numbers = true)]
    hourly_cost: Option<i64>,

    /// Include a recurring data-tool cost
    #[arg(long, overrides_with = "no_data_tool")]
    data_tool: bool,

    /// Leave out the data-tool cost even if the config enables it
    #[arg(long, overrides_with = "data_tool")]
    no_data_tool: bool,

    /// Monthly data-tool cost in EUR (50-5000)
    #[arg(long, allow_negative_numbers = true)]
    monthly_tool_cost: Option<i64>,
}

impl InputArgs {
    /// `Some` only when a data-tool flag was given; the last one wins.
    fn data_tool_override(&self) -> Option<bool> {
        match (self.data_tool, self.no_data_tool) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Forest,
    Light,
}

impl From<ThemeArg> for ThemeName {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Forest => ThemeName::Forest,
            ThemeArg::Light => ThemeName::Light,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it only logs when a file is given
    let to_stderr = !matches!(cli.command, Commands::Ui { .. });
    if let Err(e) = init_logging(cli.log_file.as_deref(), to_stderr) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let result = match cli.command {
        Commands::Estimate { inputs, format } => cmd_estimate(&config_path, inputs, format.into()),
        Commands::Ui { theme } => cmd_ui(&config_path, theme.map(Into::into)),
        Commands::Config => cmd_config(&config_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> std::io::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if to_stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_estimate(config_path: &Path, args: InputArgs, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let state = apply_overrides(&config, &args);

    print!("{}", format_report(state.inputs(), state.estimate(), format)?);
    Ok(())
}

fn cmd_ui(config_path: &Path, theme: Option<ThemeName>) -> Result<()> {
    let config = load_config(config_path)?;
    roi_calc::tui::run(config.inputs, theme.unwrap_or(config.theme))
}

fn cmd_config(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let exists = config_path.exists();

    println!("Config file: {}", config_path.display());
    if !exists {
        println!("  (not found, using defaults)");
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Start from config inputs and apply CLI overrides through the clamping
/// setters.
fn apply_overrides(config: &Config, args: &InputArgs) -> InputState {
    let mut state = InputState::new(config.inputs);

    if let Some(on) = args.data_tool_override() {
        state.set_using_data_tool(on);
    }
    if let Some(n) = args.data_sources {
        state.set_data_sources(n);
    }
    if let Some(n) = args.hours_per_week {
        state.set_hours_per_week(n);
    }
    if let Some(n) = args.hourly_cost {
        state.set_hourly_cost(n);
    }
    if let Some(n) = args.monthly_tool_cost {
        state.set_monthly_tool_cost(n);
    }

    state
}
