use crate::export::ExportFormat;
use crate::models::session::{MAX_HOURS, MIN_HOURS};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tutorlog
#[derive(Parser)]
#[command(
    name = "tutorlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log teaching sessions and review your earnings per academy, group and month",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act on this account instead of the logged-in one
    #[arg(global = true, long = "account", value_name = "EMAIL")]
    pub account: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_hours(s: &str) -> Result<f64, String> {
    let h: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !(MIN_HOURS..=MAX_HOURS).contains(&h) {
        return Err(format!("hours must be between {MIN_HOURS} and {MAX_HOURS}"));
    }
    Ok(h)
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let r: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !r.is_finite() || r < 0.0 {
        return Err("rate must be zero or positive".into());
    }
    Ok(r)
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

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Sign up, log in or out, show the current account
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Log a teaching session
    Add {
        /// Academy name
        academy: String,

        /// Group name
        group: String,

        #[arg(long, help = "Session date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, value_parser = parse_hours, help = "Session length in hours (0.5 to 12)")]
        hours: f64,

        #[arg(long, value_parser = parse_rate, help = "Hourly rate (default: the default rate from prefs)")]
        rate: Option<f64>,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,
    },

    /// Change fields of a session by id; omitted fields keep their value
    Edit {
        id: i64,

        #[arg(long)]
        academy: Option<String>,

        #[arg(long)]
        group: Option<String>,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, value_parser = parse_hours)]
        hours: Option<f64>,

        #[arg(long, value_parser = parse_rate)]
        rate: Option<f64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a session by id, or every session with --all
    Del {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long, help = "Delete all sessions of the account")]
        all: bool,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List sessions
    List {
        #[arg(long)]
        academy: Option<String>,

        #[arg(long)]
        group: Option<String>,

        #[arg(long, help = "Only this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (start:end)"
        )]
        range: Option<String>,
    },

    /// Current month at a glance
    Dashboard,

    /// Monthly trend, academy breakdown and rate distribution
    Analytics {
        #[arg(long, help = "Look back this many months (default from config)")]
        months: Option<u32>,

        #[arg(long, help = "Rate histogram buckets (default from config)")]
        bins: Option<usize>,
    },

    /// What each academy owes for a month
    Report {
        /// Month (YYYY-MM, default: latest month with sessions)
        month: Option<String>,

        #[arg(long, help = "List the months that have sessions")]
        months: bool,
    },

    /// Create many sessions at once
    Bulk(BulkArgs),

    /// Saved academies, groups and default rate
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, help = "Only the most recent N rows")]
        limit: Option<usize>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Export session data
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
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long, help = "Password (prompted when omitted)")]
        password: Option<String>,

        #[arg(long, help = "Password confirmation (prompted when omitted)")]
        confirm: Option<String>,
    },

    /// Check credentials and remember the account
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    /// Forget the remembered account
    Logout,

    /// Show the account commands act on
    Whoami,
}

#[derive(Args)]
pub struct BulkArgs {
    #[arg(long, help = "Show what would be created without saving")]
    pub dry_run: bool,

    #[command(subcommand)]
    pub mode: BulkMode,
}

#[derive(Subcommand)]
pub enum BulkMode {
    /// Same class on chosen weekdays for several weeks
    Weekly {
        #[arg(long)]
        academy: String,

        #[arg(long)]
        group: String,

        #[arg(long, value_parser = parse_hours)]
        hours: f64,

        #[arg(long, value_parser = parse_rate)]
        rate: Option<f64>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "First day of the schedule (YYYY-MM-DD, default: today)")]
        start: Option<String>,

        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=12))]
        weeks: u32,

        #[arg(long, help = "Comma separated weekdays, e.g. mon,wed")]
        days: String,
    },

    /// Several sessions on one date
    Batch {
        #[arg(long, help = "Date of all entries (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long = "entry",
            value_name = "ACADEMY|GROUP|HOURS[|RATE]",
            required = true,
            help = "One session; repeat for more"
        )]
        entries: Vec<String>,
    },

    /// Lines of `date, academy, group, hours, rate[, notes]`
    Text {
        #[arg(long, value_name = "FILE", help = "Read from a file instead of stdin")]
        file: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Print saved preferences
    Show,
    AddAcademy { name: String },
    RemoveAcademy { name: String },
    AddGroup { name: String },
    RemoveGroup { name: String },
    /// Rate used when a session is added without --rate
    SetRate {
        #[arg(value_parser = parse_rate)]
        rate: f64,
    },
    /// Add every academy and group found in the sessions
    Sync,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn hours_outside_entry_range_are_rejected() {
        assert!(parse_hours("0.25").is_err());
        assert!(parse_hours("12.5").is_err());
        assert_eq!(parse_hours("1.5"), Ok(1.5));
    }
}
