use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "modict",
    about = "Build module dictionaries from directory trees",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file whose `[build]` table supplies defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

#[derive(Subcommand)]
pub enum Command {
    /// Index modules; a missing directory yields an empty dictionary
    Optional(DictArgs),
    /// Index modules; a missing directory is an error
    Required(DictArgs),
    /// Deep-merge every module into one object
    Aggregate(DictArgs),
    /// List which modules exist without loading them
    Exists(DictArgs),
}

impl Command {
    pub fn args(&self) -> &DictArgs {
        match self {
            Command::Optional(args)
            | Command::Required(args)
            | Command::Aggregate(args)
            | Command::Exists(args) => args,
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct DictArgs {
    /// Directory to scan
    pub dirname: PathBuf,
    /// Filename pattern; capture group 1 becomes the filename
    #[arg(long)]
    pub filter: Option<String>,
    /// Relative path pattern; capture group 2 becomes the filename
    #[arg(long)]
    pub path_filter: Option<String>,
    /// Directory-name pattern to skip (default: `^\.(git|svn)$`)
    #[arg(long, conflicts_with = "no_exclude_dirs")]
    pub exclude_dirs: Option<String>,
    /// Do not skip any directories
    #[arg(long)]
    pub no_exclude_dirs: bool,
    /// Maximum directory depth below the root
    #[arg(long)]
    pub depth: Option<usize>,
    #[arg(long)]
    pub flatten: bool,
    /// With --flatten, prefix keys with the subdirectory path
    #[arg(long)]
    pub keep_directory_path: bool,
    #[arg(long)]
    pub mark_directories: bool,
    #[arg(long)]
    pub follow_links: bool,
    /// Key entries by raw filename without identity inference
    #[arg(long)]
    pub no_identity: bool,
    /// Key entries by globalId instead of identity
    #[arg(long)]
    pub global_id_keys: bool,
    /// Pattern replaced in the filename to derive the identity
    #[arg(long)]
    pub replace_expr: Option<String>,
    /// Replacement for --replace-expr
    #[arg(long)]
    pub replace_val: Option<String>,
}
