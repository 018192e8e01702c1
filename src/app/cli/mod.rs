//! CLI Adapter.

mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::{JsonSlotStore, SystemDirectoryOpener, TerminalPrompter, select_formatter};
use crate::app::commands::{add, bind, init, list, open, remove, rename, reset, validate};
use crate::app::{AppConfig, AppContext, SlotRegistry};
use crate::domain::{AppError, SlotId};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SLOTDIRS_LOG";

type CliContext = AppContext<JsonSlotStore, TerminalPrompter, SystemDirectoryOpener>;

#[derive(Parser)]
#[command(name = "slotdirs")]
#[command(version)]
#[command(
    about = "Bind named slots to folders and open them in the file browser",
    long_about = None
)]
struct Cli {
    /// Slot file to use instead of the per-user default
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every slot and its folder
    #[clap(visible_alias = "ls")]
    List {
        /// Print control descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new, unbound slot
    #[clap(visible_alias = "a")]
    Add {
        /// Display name (prompted when omitted)
        name: Option<String>,
    },
    /// Remove a slot and its folder binding
    #[clap(visible_alias = "rm")]
    Remove {
        slot: SlotId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Change a slot's display name
    Rename {
        slot: SlotId,
        /// New name (prompted when omitted)
        name: Option<String>,
    },
    /// Bind a slot to a folder
    #[clap(visible_alias = "b")]
    Bind {
        slot: SlotId,
        /// Folder to bind (prompted when omitted)
        path: Option<PathBuf>,
    },
    /// Clear a slot's folder binding
    Unbind { slot: SlotId },
    /// Open a slot's folder, or choose one if it has none
    #[clap(visible_alias = "o")]
    Open { slot: SlotId },
    /// Clear every folder binding, keeping the slots
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Unbind slots whose folder no longer exists
    Validate {
        /// Report without writing the slot file
        #[arg(long)]
        no_save: bool,
    },
    /// Create placeholder slots in an empty slot file
    Init {
        /// Number of slots to create
        #[arg(short = 'n', long, default_value_t = init::DEFAULT_SLOT_COUNT)]
        count: u32,
    },
    /// Print the slot file location
    Path,
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::resolve(cli.config)?;

    let mut ctx = build_context(&config);
    let flush_on_exit = !matches!(cli.command, Commands::Validate { no_save: true });

    match cli.command {
        Commands::List { json } => output::print_controls(&list::execute(&ctx), json)?,
        Commands::Add { name } => output::print_add(add::execute(&mut ctx, name.as_deref())?),
        Commands::Remove { slot, yes } => output::print_remove(remove::execute(&mut ctx, slot, yes)?),
        Commands::Rename { slot, name } => {
            output::print_rename(slot, rename::execute(&mut ctx, slot, name.as_deref())?)
        }
        Commands::Bind { slot, path } => {
            output::print_bind(bind::execute(&mut ctx, slot, path.as_deref())?)
        }
        Commands::Unbind { slot } => output::print_unbind(slot, bind::unbind(&mut ctx, slot)?),
        Commands::Open { slot } => output::print_open(slot, open::execute(&mut ctx, slot)?),
        Commands::Reset { yes } => output::print_reset(reset::execute(&mut ctx, yes)?),
        Commands::Validate { no_save } => {
            output::print_validate(&validate::execute(&mut ctx, !no_save)?, no_save)
        }
        Commands::Init { count } => output::print_init(&init::execute(&mut ctx, count)?),
        Commands::Path => println!("{}", config.config_path.display()),
    }

    if flush_on_exit {
        ctx.registry_mut().shutdown()?;
    }
    Ok(())
}

fn build_context(config: &AppConfig) -> CliContext {
    let registry = SlotRegistry::load(JsonSlotStore::new(&config.config_path));
    AppContext::new(
        registry,
        TerminalPrompter::new(),
        config.opener(),
        select_formatter(),
        config.appearance.clone(),
    )
}
