use clap::{Parser, Subcommand};

/// Command-line interface definition for rclock
/// CLI ledger to punch work hours into SQLite
#[derive(Parser)]
#[command(
    name = "rclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-hour ledger: punch in and out, annotate days, compare against a daily goal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create or configure a workspace
    Workspace {
        /// Workspace name
        name: String,

        /// Daily goal in hours
        #[arg(long = "hours", help = "The amount of hours to work in a given day")]
        hours: Option<u32>,

        /// strftime pattern used to print and parse dates (e.g. %d/%m/%Y)
        #[arg(long = "date-format", help = "Date pattern for this workspace")]
        date_format: Option<String>,

        /// Fail instead of updating when the workspace already exists
        #[arg(long = "new", help = "Only create: fail if the workspace exists")]
        new: bool,
    },

    /// List all workspaces
    Workspaces,

    /// Make the given workspace the active one
    Activate {
        /// Workspace name
        name: String,
    },

    /// Punch the clock (in or out, by position)
    Mark {
        #[arg(long, short = 'w', help = "Workspace (default: the active one)")]
        workspace: Option<String>,

        #[arg(long, help = "Force a given time (HH:MM, HHMM or HH:MM:SS)")]
        time: Option<String>,

        #[arg(long, help = "Force a given date (workspace format or YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Attach a comment to a day
    Comment {
        /// Comment text
        text: String,

        #[arg(long, short = 'w', help = "Workspace (default: the active one)")]
        workspace: Option<String>,

        #[arg(long, help = "Time spent on the task (HH:MM)")]
        time: Option<String>,

        #[arg(long, help = "Day of the comment (workspace format or YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Find days whose comments match a pattern
    Lookup {
        /// Text found anywhere in a comment (% or * match any run, _ or ? one character)
        pattern: String,

        #[arg(long, short = 'w', help = "Workspace (default: the active one)")]
        workspace: Option<String>,
    },

    /// Show worked hours against the goal
    Show {
        #[arg(long, short = 'w', help = "Workspace (default: the active one)")]
        workspace: Option<String>,

        #[arg(short = 'v', long = "verbose", help = "Be verbose on the list")]
        verbose: bool,

        #[arg(short = 'c', long = "comments", help = "Show comments")]
        comments: bool,

        #[arg(
            long,
            conflicts_with = "date",
            help = "The amount of months (30 days each) to go backwards"
        )]
        months: Option<u32>,

        #[arg(long, help = "Show a single date")]
        date: Option<String>,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// List days with an odd number of marks
    Check {
        #[arg(long, short = 'w', help = "Workspace (default: the active one)")]
        workspace: Option<String>,
    },

    /// Export punches and comments to two CSV files
    Export {
        #[arg(long, short = 'w', help = "Workspace (default: the active one)")]
        workspace: Option<String>,

        #[arg(long, help = "The amount of months (30 days each) to go backwards")]
        months: Option<u32>,

        #[arg(long, value_name = "DIR", help = "Output directory (default: current)")]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output files without confirmation")]
        force: bool,
    },

    /// Import punches from a `date,time` CSV file
    Import {
        /// CSV file with a `date,time` header
        file: String,

        #[arg(long, short = 'w', help = "Workspace (default: the active one)")]
        workspace: Option<String>,
    },
}
