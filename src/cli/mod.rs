//! Command-line interface for `issue_desk`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! It plays the role of the desk's pages: the worker report form, the
//! admin login, and the triage list.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use desk_lib::{FileStorage, Filter, IssueStore, LoadOutcome, Status};

use crate::config::{CliOverrides, Config};
use crate::error::CliError;
use crate::format;
use crate::logging;
use crate::session::SessionGate;

/// `desk` - local issue desk.
#[derive(Parser, Debug)]
#[command(name = "desk")]
#[command(
    author,
    version,
    about = "Local issue desk: workers report, admins triage",
    long_about = None,
    after_help = "All state lives in the data directory (default .desk/)."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Data directory (overrides DESK_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Prefix for new issue IDs (overrides DESK_ID_PREFIX)
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Append JSON log lines to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory and a config template
    Init,

    /// Report a new issue (no login needed)
    Report(ReportArgs),

    /// Start an admin session
    Login(LoginArgs),

    /// End the admin session
    Logout,

    /// List issues (admin)
    List(ListArgs),

    /// Flip an issue between open and resolved (admin)
    Toggle(IdArg),

    /// Mark an open issue resolved (admin)
    Resolve(IdArg),

    /// Re-open a resolved issue (admin)
    Reopen(IdArg),

    /// Delete an issue (admin)
    Delete(IdArg),

    /// Issue counts by status (admin; alias: status)
    #[command(alias = "status")]
    Stats,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Short summary of the problem
    #[arg(short, long)]
    pub title: String,

    /// What happened and where
    #[arg(short, long)]
    pub description: String,

    /// low, medium or high
    #[arg(short, long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LoginArgs {
    /// Admin username
    #[arg(short, long)]
    pub username: String,

    /// Admin password
    #[arg(short, long, env = "DESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Status filter: all, open or resolved (default from config)
    #[arg(short, long)]
    pub status: Option<Filter>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct IdArg {
    /// Issue ID
    pub id: String,
}

/// Shared state handed to every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub json: bool,
    pub color: bool,
}

impl Context {
    #[must_use]
    pub fn new(config: Config, json: bool) -> Self {
        Self {
            config,
            json,
            color: format::use_color(json),
        }
    }

    /// Open the storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn storage(&self) -> crate::error::Result<FileStorage> {
        Ok(FileStorage::open(&self.config.data_dir)?)
    }

    /// Open and hydrate the issue store.
    ///
    /// A corrupt collection is reported on stderr and replaced by an empty
    /// one; it is overwritten on the next mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be opened or read.
    pub fn open_store(&self) -> crate::error::Result<IssueStore<FileStorage>> {
        let mut store = IssueStore::new(self.storage()?);
        store.set_prefix(self.config.id_prefix.clone());
        if let LoadOutcome::Reset { reason } = store.load()? {
            eprintln!("Warning: stored issues were unreadable and have been ignored ({reason})");
        }
        Ok(store)
    }

    /// Fail unless an admin session is active.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` without a session, or a storage error.
    pub fn require_admin(&self) -> crate::error::Result<()> {
        if SessionGate::new(self.storage()?).is_active()? {
            Ok(())
        } else {
            Err(CliError::NotLoggedIn)
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let Some(command) = cli.command else {
        println!("desk - local issue desk. Use --help for usage.");
        return Ok(());
    };

    if matches!(command, Commands::Version) {
        commands::version::execute(cli.json)?;
        return Ok(());
    }

    let overrides = CliOverrides {
        data_dir: cli.dir,
        id_prefix: cli.prefix,
    };
    let config = Config::load(&overrides)?;
    let ctx = Context::new(config, cli.json);
    tracing::debug!(command = command.name(), "Dispatching");

    match command {
        Commands::Init => commands::init::execute(&ctx)?,
        Commands::Report(args) => commands::report::execute(&args, &ctx)?,
        Commands::Login(args) => commands::login::execute(&args, &ctx)?,
        Commands::Logout => commands::logout::execute(&ctx)?,
        Commands::List(args) => commands::list::execute(&args, &ctx)?,
        Commands::Toggle(arg) => commands::toggle::execute(&arg.id, &ctx)?,
        Commands::Resolve(arg) => commands::set_status::execute(&arg.id, Status::Resolved, &ctx)?,
        Commands::Reopen(arg) => commands::set_status::execute(&arg.id, Status::Open, &ctx)?,
        Commands::Delete(arg) => commands::delete::execute(&arg.id, &ctx)?,
        Commands::Stats => commands::stats::execute(&ctx)?,
        Commands::Version => unreachable!("handled before config load"),
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Report(_) => "report",
            Self::Login(_) => "login",
            Self::Logout => "logout",
            Self::List(_) => "list",
            Self::Toggle(_) => "toggle",
            Self::Resolve(_) => "resolve",
            Self::Reopen(_) => "reopen",
            Self::Delete(_) => "delete",
            Self::Stats => "stats",
            Self::Version => "version",
        }
    }
}
