//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod build;
mod check;
mod info;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::stylesheet::KeyframesMode;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// animate-css - Animate.css preset tables, utilities and stylesheet builds
#[derive(Parser)]
#[command(name = "animate-css")]
#[command(about = "Animate.css preset: inspect tables and utilities, emit CSS")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List preset tables, or the entries of one table
    List {
        /// Table name (presets, entrance, exit, attention, speeds)
        table: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every utility with its class name and accepted values
    Utilities {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a utility to a value and print the resulting styles as JSON
    Transform {
        /// Utility key or class name (e.g. animateIn, animate-in)
        utility: String,

        /// Value to transform (e.g. fadeIn, fast, 2s)
        value: String,

        /// Reject values outside the utility's accepted set
        #[arg(long)]
        strict: bool,
    },

    /// Print @keyframes rules
    Keyframes {
        /// Animation names (all when omitted)
        names: Vec<String>,

        /// Minify output
        #[arg(long)]
        minify: bool,
    },

    /// Build a stylesheet from animate.toml and/or --use arguments
    Build {
        /// Path to animate.toml (discovered when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extra usage as UTILITY=VALUE (repeatable)
        #[arg(long = "use", value_name = "UTILITY=VALUE")]
        uses: Vec<String>,

        /// Minify output
        #[arg(long)]
        minify: bool,

        /// Which @keyframes rules to include
        #[arg(long, value_enum)]
        keyframes: Option<KeyframesMode>,

        /// Reject values outside a utility's accepted set
        #[arg(long, conflicts_with = "lenient")]
        strict: bool,

        /// Pass unknown values through with a warning
        #[arg(long)]
        lenient: bool,

        /// Class name prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Check the preset tables for drift
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the assembled preset as JSON
    Preset {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG wins over -v
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { table, json } => info::run_list(table.as_deref(), json),
        Commands::Utilities { json } => info::run_utilities(json),
        Commands::Transform { utility, value, strict } => {
            info::run_transform(&utility, &value, strict)
        }
        Commands::Keyframes { names, minify } => build::run_keyframes(&names, minify),
        Commands::Build { config, output, uses, minify, keyframes, strict, lenient, prefix } => {
            let strict = match (strict, lenient) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            build::run_build(build::BuildArgs {
                config,
                output,
                uses,
                minify: minify.then_some(true),
                keyframes,
                strict,
                prefix,
            })
        }
        Commands::Check { json } => check::run_check(json),
        Commands::Preset { compact } => info::run_preset(compact),
    }
}
