//! formkit CLI - inspect and render YAML wrapper definitions

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "formkit")]
#[command(version)]
#[command(about = "Inspect and render form field wrappers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the contexts and wrappers defined in a file
    List {
        /// YAML definition file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print the tree of one wrapper, or of every wrapper in a context
    Show {
        /// YAML definition file
        #[arg(short, long)]
        config: PathBuf,

        /// Context to read from
        #[arg(long, default_value = formkit::DEFAULT_CONTEXT)]
        context: String,

        /// Wrapper to show (all wrappers when omitted)
        #[arg(short, long)]
        wrapper: Option<String>,
    },

    /// Render one field with a wrapper
    Render {
        /// YAML definition file (built-in wrappers only when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Context to activate
        #[arg(long, default_value = formkit::DEFAULT_CONTEXT)]
        context: String,

        /// Wrapper to use (mapped from --input-type or the default when omitted)
        #[arg(short, long)]
        wrapper: Option<String>,

        /// Field attribute name
        #[arg(long, default_value = "field")]
        attribute: String,

        /// Input type used for wrapper mappings
        #[arg(long)]
        input_type: Option<String>,

        /// Pre-rendered component markup (NAME=MARKUP)
        #[arg(short, long, value_name = "NAME=MARKUP")]
        slot: Vec<String>,

        /// Label text
        #[arg(long)]
        label: Option<String>,

        /// Mark the field as required
        #[arg(long)]
        required: bool,

        /// Hint text
        #[arg(long)]
        hint: Option<String>,

        /// Error message (repeatable)
        #[arg(short, long)]
        error: Vec<String>,

        /// Mark the field as validated
        #[arg(long)]
        validated: bool,

        /// Enable an optional component or namespace (repeatable)
        #[arg(long)]
        enable: Vec<String>,

        /// Disable a component or namespace (repeatable)
        #[arg(long)]
        disable: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formkit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { config } => commands::list::execute(&config),
        Commands::Show {
            config,
            context,
            wrapper,
        } => commands::show::execute(&config, &context, wrapper.as_deref()),
        Commands::Render {
            config,
            context,
            wrapper,
            attribute,
            input_type,
            slot,
            label,
            required,
            hint,
            error,
            validated,
            enable,
            disable,
        } => commands::render::execute(commands::render::RenderArgs {
            config,
            context,
            wrapper,
            attribute,
            input_type,
            slots: slot,
            label,
            required,
            hint,
            errors: error,
            validated,
            enable,
            disable,
        }),
    }
}
