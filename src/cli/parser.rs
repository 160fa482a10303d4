use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchlog
/// CLI application to track attendance with SQLite
#[derive(Parser)]
#[command(
    name = "punchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: punch in/out, monthly calendar, and timesheet using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, pinned OTP)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register the local account (overwrites any existing one)
    Register {
        #[arg(long, help = "Account username")]
        username: String,

        #[arg(long, help = "Account email address")]
        email: String,

        #[arg(long, help = "Password (6-12 characters)")]
        password: String,

        #[arg(long, help = "Password confirmation")]
        confirm: String,
    },

    /// Log in and open the tracker session
    Login {
        #[arg(long, help = "Account username")]
        username: String,

        #[arg(long, help = "Account password")]
        password: String,
    },

    /// Log out and close the tracker session
    Logout,

    /// Recover a forgotten password via a mocked OTP flow
    #[command(name = "forgot-password")]
    ForgotPassword,

    /// Punch in or out for the current date
    Punch {
        #[arg(long = "in", help = "Start a punch session", conflicts_with = "clock_out")]
        clock_in: bool,

        #[arg(long = "out", help = "End the active punch session")]
        clock_out: bool,

        /// Target date (YYYY-MM-DD); punching is only allowed for today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Show punch state and logged time for a date
    Status {
        /// Date to inspect (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(
            long = "watch",
            help = "Redraw every second while the punch session is active"
        )]
        watch: bool,
    },

    /// Render the monthly attendance calendar
    Calendar {
        /// Month to render (YYYY-MM, default current month)
        #[arg(long = "month")]
        month: Option<String>,
    },

    /// List logged days, most recent first
    Timesheet,

    /// Export timesheet data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete all attendance records
    Reset {
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
