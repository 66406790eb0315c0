//! Clap derive structures for the `spooldash` CLI.
//!
//! Defines the command tree, global flags, and shared enums. This module
//! must only depend on `clap` and `clap_complete`: the build script
//! includes it directly to generate man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// spooldash -- SimplyPrint filament inventory from the command line
#[derive(Debug, Parser)]
#[command(
    name = "spooldash",
    version,
    about = "Inspect SimplyPrint filament spool inventory from the command line",
    long_about = "A read-only dashboard for the SimplyPrint filament inventory API.\n\n\
        Fetches spools and materials for one company, joins them, and renders\n\
        tables or structured output. Repeated runs within the refresh window\n\
        are served from an in-process cache.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// SimplyPrint API base URL (overrides config file)
    #[arg(long, env = "SIMPLYPRINT_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// SimplyPrint API token
    #[arg(long, env = "SIMPLYPRINT_API_TOKEN", global = true, hide_env = true)]
    pub api_token: Option<String>,

    /// Company (tenant) id
    #[arg(long, env = "SIMPLYPRINT_API_COMPANY_ID", global = true)]
    pub company_id: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SIMPLYPRINT_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SPOOLDASH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect filament spools
    #[command(alias = "sp")]
    Spools(SpoolsArgs),

    /// Inspect material definitions
    #[command(alias = "mat")]
    Materials(MaterialsArgs),

    /// Show the last-fetch timestamp and inventory counts
    Status,

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SPOOLS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SpoolsArgs {
    #[command(subcommand)]
    pub command: SpoolsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SpoolsCommand {
    /// List spools joined with their materials
    #[command(alias = "ls")]
    List(SpoolListArgs),

    /// Get one spool in detail
    Get {
        /// Spool id
        id: i64,
    },
}

/// Material-attribute filters for spool listings. Repeatable; values of
/// the same flag are OR-ed, distinct flags are AND-ed.
#[derive(Debug, Args)]
pub struct SpoolListArgs {
    /// Keep spools whose material brand matches (exact, repeatable)
    #[arg(long = "brand", value_name = "BRAND")]
    pub brands: Vec<String>,

    /// Keep spools whose material type matches, e.g. PLA (repeatable)
    #[arg(long = "material-type", value_name = "TYPE")]
    pub material_types: Vec<String>,

    /// Keep spools whose filament type name matches (repeatable)
    #[arg(long = "filament-type", value_name = "NAME")]
    pub filament_types: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MATERIALS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MaterialsArgs {
    #[command(subcommand)]
    pub command: MaterialsCommand,
}

#[derive(Debug, Subcommand)]
pub enum MaterialsCommand {
    /// List material definitions
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (token redacted)
    Show,

    /// Print the config file path
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
