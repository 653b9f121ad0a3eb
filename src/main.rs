use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_budgets_command, handle_dashboard_command, handle_report_command,
    handle_transactions_command, BudgetsArgs, DashboardArgs, OutputFormat, ReportArgs,
    TransactionsArgs,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Budget tracking and financial reports over record snapshots",
    long_about = "fintrack evaluates spending budgets against their period windows and \
                  builds category breakdowns, monthly series and dashboard summaries \
                  from a JSON snapshot of income, expense and savings records."
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table, env = "FINTRACK_FORMAT")]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every budget in a snapshot
    Budgets(BudgetsArgs),

    /// Financial report over the trailing months
    Report(ReportArgs),

    /// Dashboard summary for a date range
    Dashboard(DashboardArgs),

    /// List and filter transactions
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// Show current configuration and paths
    Config {
        /// Write the default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = chrono::Local::now().date_naive();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Budgets(args)) => {
            handle_budgets_command(args, &settings, cli.format, today, &mut out)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(args, &settings, cli.format, today, &mut out)?;
        }
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(args, &settings, cli.format, today, &mut out)?;
        }
        Some(Commands::Transactions(args)) => {
            handle_transactions_command(args, &settings, cli.format, today, &mut out)?;
        }
        Some(Commands::Config { init }) => {
            if init && !paths.is_initialized() {
                settings.save(&paths)?;
                writeln!(out, "Wrote default settings to {}", paths.settings_file().display())?;
            }

            if cli.format == OutputFormat::Json {
                serde_json::to_writer_pretty(&mut out, &settings)?;
                writeln!(out)?;
            } else {
                writeln!(out, "fintrack Configuration")?;
                writeln!(out, "======================")?;
                writeln!(out, "Config directory: {}", paths.base_dir().display())?;
                writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
                writeln!(out)?;
                writeln!(out, "Settings:")?;
                writeln!(out, "  Currency symbol:      {}", settings.currency_symbol)?;
                writeln!(out, "  Date format:          {}", settings.date_format)?;
                writeln!(out, "  Report range:         {} months", settings.default_range_months)?;
                writeln!(out, "  Recent transactions:  {}", settings.recent_transactions_limit)?;
                writeln!(out, "  Recent budgets:       {}", settings.recent_budgets_limit)?;
            }
        }
        None => {
            writeln!(out, "fintrack - budget tracking and financial reports")?;
            writeln!(out)?;
            writeln!(out, "Run 'fintrack --help' for usage information.")?;
        }
    }

    out.flush()?;
    Ok(())
}
