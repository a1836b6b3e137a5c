use anyhow::Result;
use clap::{Parser, Subcommand};

use hse::cli::{
    handle_month_command, handle_month_key, handle_report_command, handle_week_command,
    MonthCommands, ReportCommands, WeekCommands,
};
use hse::config::{paths::HsePaths, settings::Settings};
use hse::storage::Storage;

#[derive(Parser)]
#[command(
    name = "hse-kpi",
    version,
    about = "HSE KPI tracker with a 52-week Saturday-Friday fiscal calendar",
    long_about = "hse-kpi records weekly health, safety and environment indicators \
                  against a fixed 52-week fiscal calendar (weeks run Saturday to \
                  Friday) and rolls them up into calendar-month reports."
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fiscal week calendar commands
    #[command(subcommand)]
    Week(WeekCommands),

    /// Month key of a week date range
    MonthKey {
        /// Week start date (YYYY-MM-DD)
        start: String,
        /// Week end date (YYYY-MM-DD)
        end: String,
    },

    /// Month rollup commands
    #[command(subcommand)]
    Month(MonthCommands),

    /// Weekly report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let paths = HsePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Week(cmd)) => handle_week_command(&settings, cmd)?,
        Some(Commands::MonthKey { start, end }) => handle_month_key(&start, &end)?,
        Some(Commands::Month(cmd)) => handle_month_command(&settings, cmd)?,
        Some(Commands::Report(cmd)) => {
            let mut storage = Storage::new(paths.clone())?;
            storage.load_all()?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing hse-kpi at: {}", paths.base_dir().display());
            let storage = Storage::new(paths.clone())?;
            if !paths.weekly_reports_file().exists() {
                storage.save_all()?;
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("hse-kpi Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Date format:     {}", settings.date_format);
            println!("  Export format:   {:?}", settings.default_export_format);
            println!(
                "  Default project: {}",
                settings.default_project.as_deref().unwrap_or("(none)")
            );
        }
        None => {
            println!("hse-kpi - weekly HSE KPIs on a 52-week fiscal calendar");
            println!();
            println!("Run 'hse-kpi --help' for usage information.");
            println!("Run 'hse-kpi week current' to see this fiscal week.");
        }
    }

    Ok(())
}

/// Set up the tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter_str = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
