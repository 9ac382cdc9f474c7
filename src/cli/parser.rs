use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for controlhoras
/// CLI application to turn clock-in/clock-out exports into hour reports
#[derive(Parser)]
#[command(
    name = "controlhoras",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn raw clock-in/clock-out exports into daily, weekly and monthly hour reports",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,
    },

    /// Print the hour report for an attendance export
    Report {
        /// Input file (delimited attendance export)
        file: String,

        #[arg(long = "user", help = "Filter by full name (NOMBRE APELLIDOS); repeatable")]
        user: Vec<String>,

        #[arg(long = "week", help = "Filter by ISO week (YYYY-Www); repeatable")]
        week: Vec<String>,

        #[arg(long = "weekly", help = "Show only the weekly totals table")]
        weekly: bool,

        #[arg(long = "monthly", help = "Show only the monthly totals table")]
        monthly: bool,
    },

    /// Export the report (summary + totals) to a file
    Export {
        /// Input file (delimited attendance export)
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE", help = "Absolute output file path")]
        out: String,

        #[arg(long = "user", help = "Filter by full name; repeatable")]
        user: Vec<String>,

        #[arg(long = "week", help = "Filter by ISO week (YYYY-Www); repeatable")]
        week: Vec<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a ZIP archive with one workbook per worker
    Bundle {
        /// Input file (delimited attendance export)
        file: String,

        #[arg(long = "out", value_name = "FILE", help = "Absolute output .zip path")]
        out: String,

        #[arg(long = "user", help = "Filter by full name; repeatable")]
        user: Vec<String>,

        #[arg(long = "week", help = "Filter by ISO week (YYYY-Www); repeatable")]
        week: Vec<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
