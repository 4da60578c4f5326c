//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use easyeuler_core::application::SortKey;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "easyeuler",
    bin_name = "easyeuler",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Manage and verify Project Euler solutions",
    long_about = "EasyEuler creates solution files from per-language templates, \
                  shows problem descriptions and checks solutions against the \
                  known answers.",
    after_help = "EXAMPLES:\n\
        \x20 easyeuler create 1 python\n\
        \x20 easyeuler verify euler_001.py --time\n\
        \x20 easyeuler verify solutions/ --recursive\n\
        \x20 easyeuler list --sort difficulty",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the solution file for a problem.
    #[command(
        about = "Create the file for a problem",
        long_about = "Create the file for a problem.\n\n\
            The file is written to euler_<id>.<extension> unless --path is \
            given. LANGUAGE selects the template and defaults to \
            defaults.language from the configuration.",
        after_help = "EXAMPLES:\n\
            \x20 easyeuler create 1\n\
            \x20 easyeuler create 7 c\n\
            \x20 easyeuler create 3 ruby --path solutions/three.rb"
    )]
    Create(CreateArgs),

    /// List all problems.
    #[command(
        visible_alias = "ls",
        about = "List all available problems",
        after_help = "EXAMPLES:\n\
            \x20 easyeuler list\n\
            \x20 easyeuler list --long\n\
            \x20 easyeuler list --sort difficulty --format csv"
    )]
    List(ListArgs),

    /// Show a problem's description.
    #[command(about = "Show a problem's description")]
    Show(ShowArgs),

    /// Copy resource files referenced by problems.
    #[command(
        name = "generate-resources",
        about = "Generate the resource files for problems",
        long_about = "Generate the resource files for problems.\n\n\
            These are data files or illustrations referenced in the problem \
            text. Without PROBLEM every available resource is generated.",
        after_help = "EXAMPLES:\n\
            \x20 easyeuler generate-resources 22\n\
            \x20 easyeuler generate-resources --path data/"
    )]
    GenerateResources(GenerateResourcesArgs),

    /// Verify solutions against the known answers.
    #[command(
        about = "Verify the solution to a problem",
        long_about = "Verify the solution to a problem.\n\n\
            Runs the build, execute and cleanup commands configured for the \
            language with the file path substituted for {path}, then compares \
            the output with the answer. The language is taken from the file \
            extension unless --language is given; the problem ID from the \
            file name.",
        after_help = "EXAMPLES:\n\
            \x20 easyeuler verify euler_001.py\n\
            \x20 easyeuler verify euler_004.c --time --errors\n\
            \x20 easyeuler verify . --recursive"
    )]
    Verify(VerifyArgs),

    /// Initialise an EasyEuler configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 easyeuler init\n\
            \x20 easyeuler init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 easyeuler completions bash > ~/.local/share/bash-completion/completions/easyeuler\n\
            \x20 easyeuler completions zsh  > ~/.zfunc/_easyeuler\n\
            \x20 easyeuler completions fish > ~/.config/fish/completions/easyeuler.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the EasyEuler configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 easyeuler config get defaults.language\n\
            \x20 easyeuler config get languages.c.build\n\
            \x20 easyeuler config list"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `easyeuler create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Problem ID.
    #[arg(value_name = "PROBLEM")]
    pub problem: String,

    /// Language of the solution file.
    #[arg(value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Write the file to PATH instead of euler_<id>.<extension>.
    #[arg(short = 'p', long = "path", value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file without asking.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `easyeuler list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include problem descriptions.
    #[arg(short = 'l', long = "long")]
    pub long: bool,

    /// Sort the list by problem attribute.
    #[arg(short = 's', long = "sort", value_enum, default_value = "id")]
    pub sort: SortArg,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "list",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Attribute to sort problems by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Id,
    Difficulty,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => SortKey::Id,
            SortArg::Difficulty => SortKey::Difficulty,
        }
    }
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned id, difficulty and name columns.
    Table,
    /// `Problem <id>: <name>` lines.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `easyeuler show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Problem ID.
    #[arg(value_name = "PROBLEM")]
    pub problem: String,
}

// ── generate-resources ────────────────────────────────────────────────────────

/// Arguments for `easyeuler generate-resources`.
#[derive(Debug, Args)]
pub struct GenerateResourcesArgs {
    /// Problem ID; every resource when omitted.
    #[arg(value_name = "PROBLEM")]
    pub problem: Option<String>,

    /// Create the file(s) at PATH.
    #[arg(short = 'p', long = "path", value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files without asking.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

// ── verify ────────────────────────────────────────────────────────────────────

/// Arguments for `easyeuler verify`.
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Solution files or directories.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// The language of the file(s).
    #[arg(short = 'l', long = "language", value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Verify files in specified directory paths.
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Time the execution of files.
    #[arg(short = 't', long = "time")]
    pub time: bool,

    /// Show errors.
    #[arg(short = 'e', long = "errors")]
    pub errors: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `easyeuler init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `easyeuler completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `easyeuler config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `languages.python.execute`.
        key: String,
    },
    /// Print the merged configuration.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
