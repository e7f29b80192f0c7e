//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod install;
mod query;
#[cfg(feature = "mcp")]
mod serve;
mod validate;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{
    find_config_from, find_xdg_config, load_config, merge_cli_overrides, project_root,
    resolve_path, CliOverrides, ConfigError, VitaConfig,
};
use crate::engine::DesignEngine;
use crate::error::EngineError;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// ViTA design system server - design tokens, components and markup generation
#[derive(Parser)]
#[command(name = "vita")]
#[command(about = "ViTA design system server - design tokens, components and markup generation")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to vita.toml (default: search upwards, then $XDG_CONFIG_HOME/vita)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root that relative source paths resolve against
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// CSS token source
    #[arg(long, global = true)]
    pub tokens: Option<PathBuf>,

    /// Figma token export
    #[arg(long, global = true)]
    pub figma: Option<PathBuf>,

    /// HTML-escape caller-supplied text in generated markup
    #[arg(long, global = true)]
    pub escape_html: bool,

    /// Log level or filter directive (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdin/stdout
    #[cfg(feature = "mcp")]
    Serve,

    /// List resources, or print one resource
    Resources {
        /// Resource URI (e.g. design://tokens/colors)
        uri: Option<String>,
    },

    /// Print the tool descriptors as JSON
    Tools,

    /// Call a tool and print its output
    Call {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },

    /// Look up a design token by CSS custom property name
    Token {
        /// Token name without the leading dashes (e.g. vita-color-brand-primary)
        name: String,
    },

    /// Validate markup against the design system
    Validate {
        /// File to validate
        file: Option<PathBuf>,

        /// Read markup from stdin
        #[arg(long)]
        stdin: bool,

        /// Skip the accessibility checks
        #[arg(long)]
        no_accessibility: bool,
    },

    /// Report token sources and catalog contents
    Check,

    /// Register this server with the desktop MCP client
    Install {
        /// Client config file (default: platform location)
        #[arg(long)]
        client_config: Option<PathBuf>,

        /// Print the resulting config instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Loaded configuration and the root its paths resolve against
#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub config: VitaConfig,
    pub config_path: Option<PathBuf>,
    pub root: PathBuf,
}

impl Context {
    pub fn engine(&self) -> DesignEngine {
        DesignEngine::from_config(&self.config, &self.root)
    }
}

fn absolutize(cwd: &Path, path: &Option<PathBuf>) -> Option<PathBuf> {
    path.as_deref().map(|p| resolve_path(cwd, p))
}

/// Find and load the configuration, then apply command-line overrides.
pub(crate) fn load_context(global: &GlobalArgs) -> Result<Context, ConfigError> {
    let cwd = std::env::current_dir()?;
    let root_arg = absolutize(&cwd, &global.root);

    let config_path = match absolutize(&cwd, &global.config) {
        Some(path) => Some(path),
        None => {
            find_config_from(root_arg.clone().unwrap_or_else(|| cwd.clone())).or_else(find_xdg_config)
        }
    };
    let mut config = load_config(config_path.as_deref())?;

    let overrides = CliOverrides {
        tokens: absolutize(&cwd, &global.tokens),
        figma: absolutize(&cwd, &global.figma),
        escape_html: global.escape_html.then_some(true),
    };
    merge_cli_overrides(&mut config, &overrides);

    let root = root_arg
        .or_else(|| config_path.as_deref().and_then(project_root).map(Path::to_path_buf))
        .unwrap_or(cwd);

    Ok(Context { config, config_path, root })
}

/// Caller mistakes exit with `EXIT_INVALID_ARGS`, anything else with `EXIT_ERROR`.
pub(crate) fn exit_code_for(err: &EngineError) -> u8 {
    match err {
        EngineError::UnknownResource(_)
        | EngineError::UnknownTool(_)
        | EngineError::InvalidArguments { .. } => EXIT_INVALID_ARGS,
        _ => EXIT_ERROR,
    }
}

pub(crate) fn report_engine_error(err: &EngineError) -> ExitCode {
    eprintln!("Error: {}", err);
    ExitCode::from(exit_code_for(err))
}

/// Main entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let context = match load_context(&cli.global) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error loading vita.toml: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    crate::logging::init(cli.global.log_level.as_deref(), context.config.logging.level.as_deref());

    match cli.command {
        #[cfg(feature = "mcp")]
        Commands::Serve => serve::run_serve(&context),
        Commands::Resources { uri } => query::run_resources(&context, uri.as_deref()),
        Commands::Tools => query::run_tools(),
        Commands::Call { tool, args } => query::run_call(&context, &tool, args.as_deref()),
        Commands::Token { name } => query::run_token(&context, &name),
        Commands::Validate { file, stdin, no_accessibility } => {
            validate::run_validate(file.as_deref(), stdin, !no_accessibility)
        }
        Commands::Check => check::run_check(&context),
        Commands::Install { client_config, dry_run } => {
            install::run_install(&context, client_config.as_deref(), dry_run)
        }
    }
}
