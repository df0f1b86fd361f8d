use std::fs;
use std::path::Path;

use anyhow::Context;
use modict::BuildOptions;
use modict_include::compile_pattern;
use serde::{Deserialize, Serialize};

use crate::cli::DictArgs;

/// Contents of a `--config` file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub build: BuildSection,
}

/// Defaults for every build; command-line flags take precedence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub filter: Option<String>,
    pub path_filter: Option<String>,
    /// An empty string disables directory exclusion.
    pub exclude_dirs: Option<String>,
    pub depth: Option<usize>,
    pub flatten_directories: bool,
    pub keep_directory_path: bool,
    pub mark_directories: bool,
    pub follow_links: bool,
    pub identity: Option<bool>,
    pub use_global_id_for_key_name: bool,
    pub replace_expr: Option<String>,
    pub replace_val: Option<String>,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Overlay command-line flags on the config file and compile the result.
pub fn build_options(args: &DictArgs, config: &BuildSection) -> anyhow::Result<BuildOptions> {
    let mut opts = BuildOptions::new(&args.dirname);

    if let Some(filter) = args.filter.as_ref().or(config.filter.as_ref()) {
        opts.include.filter = Some(compile_pattern(filter)?);
    }
    if let Some(filter) = args.path_filter.as_ref().or(config.path_filter.as_ref()) {
        opts.include.path_filter = Some(compile_pattern(filter)?);
    }

    if args.no_exclude_dirs {
        opts = opts.without_exclude_dirs();
    } else if let Some(pattern) = args.exclude_dirs.as_ref().or(config.exclude_dirs.as_ref()) {
        opts = if pattern.is_empty() {
            opts.without_exclude_dirs()
        } else {
            opts.with_exclude_dirs(compile_pattern(pattern)?)
        };
    }

    opts.include.depth = args.depth.or(config.depth);
    opts.include.flatten_directories = args.flatten || config.flatten_directories;
    opts.include.keep_directory_path = args.keep_directory_path || config.keep_directory_path;
    opts.include.mark_directories = args.mark_directories || config.mark_directories;
    opts.include.follow_links = args.follow_links || config.follow_links;

    opts.identity = !args.no_identity && config.identity.unwrap_or(true);
    opts.use_global_id_for_key_name = args.global_id_keys || config.use_global_id_for_key_name;

    if let Some(expr) = args.replace_expr.as_ref().or(config.replace_expr.as_ref()) {
        opts = opts.with_replace_expr(compile_pattern(expr)?);
    }
    opts.replace_val = args.replace_val.clone().or_else(|| config.replace_val.clone());

    Ok(opts)
}
