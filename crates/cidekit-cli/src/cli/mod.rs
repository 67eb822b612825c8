//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cidekit_core::domain::NewlinePreference;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cidekit",
    bin_name = "cidekit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7} Project bootstrapper for CIDE-style CMake workspaces",
    long_about = "cidekit creates the descriptor, build file, and source stub \
                  a CIDE-style environment needs, or attaches a descriptor to \
                  a CMake project you already have.",
    after_help = "EXAMPLES:\n\
        \x20 cidekit new my-app\n\
        \x20 cidekit attach path/to/CMakeLists.txt\n\
        \x20 cidekit guess path/to/CMakeLists.txt\n\
        \x20 cidekit completions bash > /usr/share/bash-completion/completions/cidekit",
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
    /// Create a brand-new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 cidekit new my-app\n\
            \x20 cidekit new ../elsewhere/my-app --newline crlf\n\
            \x20 cidekit new my-app --dry-run"
    )]
    New(NewArgs),

    /// Attach a project descriptor to an existing CMakeLists.txt.
    #[command(
        visible_alias = "a",
        about = "Attach to an existing CMakeLists.txt",
        after_help = "EXAMPLES:\n\
            \x20 cidekit attach repo/CMakeLists.txt\n\
            \x20 cidekit attach repo/CMakeLists.txt --name my-app\n\
            \x20 cidekit attach repo/CMakeLists.txt --build-dir repo/build-debug"
    )]
    Attach(AttachArgs),

    /// Print the project name guessed from a CMakeLists.txt.
    #[command(
        about = "Guess the project name from a CMakeLists.txt",
        after_help = "EXAMPLES:\n\
            \x20 cidekit guess repo/CMakeLists.txt"
    )]
    Guess(GuessArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cidekit completions bash > ~/.local/share/bash-completion/completions/cidekit\n\
            \x20 cidekit completions zsh  > ~/.zfunc/_cidekit\n\
            \x20 cidekit completions fish > ~/.config/fish/completions/cidekit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the cidekit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cidekit config get newline\n\
            \x20 cidekit config set newline crlf\n\
            \x20 cidekit config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `cidekit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Newline convention for the generated files.
    #[arg(
        long = "newline",
        value_name = "FORMAT",
        value_enum,
        help = "Newline format (default from config)"
    )]
    pub newline: Option<NewlineFormat>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── attach ────────────────────────────────────────────────────────────────────

/// Arguments for `cidekit attach`.
#[derive(Debug, Args)]
pub struct AttachArgs {
    /// The existing CMakeLists.txt to attach to.
    #[arg(value_name = "CMAKE_FILE", help = "Path to an existing CMakeLists.txt")]
    pub cmake_file: PathBuf,

    /// Project name.  Defaults to the name guessed from the file.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name (default: guessed from the file)"
    )]
    pub name: Option<String>,

    /// Build directory.  Defaults to an existing `build*` sibling of the
    /// CMakeLists.txt, or `build` next to it.
    #[arg(
        short = 'b',
        long = "build-dir",
        value_name = "DIR",
        help = "Build directory (default: detected next to the file)"
    )]
    pub build_dir: Option<PathBuf>,

    /// Newline convention for the generated descriptor.
    #[arg(
        long = "newline",
        value_name = "FORMAT",
        value_enum,
        help = "Newline format (default from config)"
    )]
    pub newline: Option<NewlineFormat>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and attach immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── guess ─────────────────────────────────────────────────────────────────────

/// Arguments for `cidekit guess`.
#[derive(Debug, Args)]
pub struct GuessArgs {
    /// The CMakeLists.txt to inspect.
    #[arg(value_name = "CMAKE_FILE", help = "Path to an existing CMakeLists.txt")]
    pub cmake_file: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cidekit completions`.
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

/// Subcommands for `cidekit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `newline` or `output.no_color`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Newline conventions for generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum NewlineFormat {
    Lf,
    Crlf,
}

impl From<NewlineFormat> for NewlinePreference {
    fn from(fmt: NewlineFormat) -> Self {
        match fmt {
            NewlineFormat::Lf => NewlinePreference::Lf,
            NewlineFormat::Crlf => NewlinePreference::Crlf,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
