//! Recursive directory traversal.
//!
//! Each directory level is listed in file-name order, so the same tree
//! always produces the same [`Discovery`].

use std::collections::BTreeMap;
use std::path::Path;

use modict_types::{DiscoveredModule, Map, Value};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{IncludeError, IncludeResult};
use crate::loader::load_document;
use crate::options::IncludeOptions;

/// Derived filename to discovered module.
pub type Discovery = BTreeMap<String, DiscoveredModule>;

/// Walk `options.dirname` and load every matching file.
pub fn include_all(options: &IncludeOptions) -> IncludeResult<Discovery> {
    let root = options.root();
    if !root.is_dir() {
        if options.optional {
            warn!(dir = %root.display(), "optional directory missing; nothing to include");
            return Ok(Discovery::new());
        }
        return Err(IncludeError::DirectoryNotFound(root.to_path_buf()));
    }

    let discovery = include_dir(root, 0, options)?;
    debug!(dir = %root.display(), count = discovery.len(), "traversal complete");
    Ok(discovery)
}

fn include_dir(dir: &Path, level: usize, options: &IncludeOptions) -> IncludeResult<Discovery> {
    let mut modules = Discovery::new();

    let listing = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(options.follow_links)
        .sort_by_file_name();

    for entry in listing {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            if options.exclude_dirs.excludes(&name) {
                debug!(dir = %entry.path().display(), "excluded directory");
                continue;
            }
            if options.depth.is_some_and(|max| level >= max) {
                continue;
            }

            let members = include_dir(entry.path(), level + 1, options)?;
            if options.flatten_directories {
                for (key, module) in members {
                    let key = if options.keep_directory_path {
                        format!("{name}/{key}")
                    } else {
                        key
                    };
                    modules.insert(key, module);
                }
            } else {
                modules.insert(name, group_directory(members, options.mark_directories));
            }
            continue;
        }

        let Some(key) = derive_filename(entry.path(), &name, options) else {
            continue;
        };

        let module = if options.dont_load {
            DiscoveredModule::Placeholder
        } else {
            load_document(entry.path())?
        };
        debug!(path = %entry.path().display(), key = %key, kind = module.kind(), "discovered");
        modules.insert(key, module);
    }

    Ok(modules)
}

/// Apply the filename and path filters. `None` means the file is skipped.
fn derive_filename(path: &Path, file_name: &str, options: &IncludeOptions) -> Option<String> {
    let mut key = match &options.filter {
        Some(filter) => {
            let caps = filter.captures(file_name)?;
            match caps.get(1) {
                Some(group) => group.as_str().to_string(),
                None => file_stem(path, file_name),
            }
        }
        None => file_stem(path, file_name),
    };

    if let Some(path_filter) = &options.path_filter {
        let relative = relative_path(options.root(), path);
        let caps = path_filter.captures(&relative)?;
        if let Some(group) = caps.get(2) {
            key = group.as_str().to_string();
        }
    }

    Some(key)
}

fn file_stem(path: &Path, file_name: &str) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

/// `/`-prefixed path of `path` below `root`, with `/` separators.
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Fold a subdirectory's members into one nested object.
fn group_directory(members: Discovery, mark: bool) -> DiscoveredModule {
    let mut group = Map::new();
    for (key, module) in members {
        if let Some(value) = module.into_value() {
            group.insert(key, value);
        }
    }
    if mark {
        group.insert("isDirectory".to_string(), Value::Bool(true));
    }
    DiscoveredModule::Object(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{compile_pattern, DirFilter};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        fs::write(dir.path().join("PageController.json"), r#"{"showHomePage": "home"}"#).unwrap();
        fs::write(dir.path().join("UserController.json"), r#"{"login": "login"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a controller").unwrap();

        let admin = dir.path().join("admin");
        fs::create_dir_all(&admin).unwrap();
        fs::write(admin.join("AuditController.json"), r#"{"list": "list"}"#).unwrap();

        let git = dir.path().join(".git");
        fs::create_dir_all(&git).unwrap();
        fs::write(git.join("HeadController.json"), r#"{"ref": "main"}"#).unwrap();

        dir
    }

    fn controllers(dir: &TempDir) -> IncludeOptions {
        IncludeOptions::new(dir.path())
            .with_filter(compile_pattern(r"(.+)Controller\.json$").unwrap())
            .with_exclude_dirs(compile_pattern(r"^\.(git|svn)$").unwrap())
    }

    #[test]
    fn filter_capture_becomes_key() {
        let dir = create_test_dir();
        let found = include_all(&controllers(&dir)).unwrap();

        assert_eq!(found["Page"], DiscoveredModule::from(json!({"showHomePage": "home"})));
        assert_eq!(found["User"], DiscoveredModule::from(json!({"login": "login"})));
        assert!(!found.contains_key("notes"));
    }

    #[test]
    fn subdirectories_nest_by_default() {
        let dir = create_test_dir();
        let found = include_all(&controllers(&dir)).unwrap();

        assert_eq!(
            found["admin"],
            DiscoveredModule::from(json!({"Audit": {"list": "list"}}))
        );
    }

    #[test]
    fn excluded_directories_are_skipped() {
        let dir = create_test_dir();
        let found = include_all(&controllers(&dir)).unwrap();

        assert!(!found.contains_key(".git"));
        assert!(!found.contains_key("Head"));
    }

    #[test]
    fn unset_exclusion_walks_everything() {
        let dir = create_test_dir();
        let opts = controllers(&dir).with_flatten_directories(false);
        let opts = IncludeOptions {
            exclude_dirs: DirFilter::Unset,
            ..opts
        };
        let found = include_all(&opts).unwrap();
        assert!(found.contains_key("Head"));
    }

    #[test]
    fn flatten_lifts_members() {
        let dir = create_test_dir();
        let found = include_all(&controllers(&dir).with_flatten_directories(false)).unwrap();

        assert!(found.contains_key("Audit"));
        assert!(!found.contains_key("admin"));
    }

    #[test]
    fn flatten_keeps_directory_path() {
        let dir = create_test_dir();
        let found = include_all(&controllers(&dir).with_flatten_directories(true)).unwrap();

        assert!(found.contains_key("admin/Audit"));
        assert!(found.contains_key("Page"));
    }

    #[test]
    fn mark_directories_tags_groups() {
        let dir = create_test_dir();
        let found = include_all(&controllers(&dir).with_mark_directories(true)).unwrap();

        assert_eq!(
            found["admin"],
            DiscoveredModule::from(json!({"Audit": {"list": "list"}, "isDirectory": true}))
        );
    }

    #[test]
    fn depth_zero_reads_root_only() {
        let dir = create_test_dir();
        let found = include_all(&controllers(&dir).with_depth(0)).unwrap();

        assert!(!found.contains_key("admin"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn dont_load_records_placeholders() {
        let dir = create_test_dir();
        fs::write(dir.path().join("BrokenController.json"), "{ nope").unwrap();
        let found = include_all(&controllers(&dir).with_dont_load(true)).unwrap();

        assert_eq!(found["Page"], DiscoveredModule::Placeholder);
        assert_eq!(found["Broken"], DiscoveredModule::Placeholder);
    }

    #[test]
    fn no_filter_uses_file_stem() {
        let dir = create_test_dir();
        let opts = IncludeOptions::new(dir.path()).with_depth(0);
        let found = include_all(&opts).unwrap();

        assert!(found.contains_key("PageController"));
        assert!(found["notes"].is_absent());
    }

    #[test]
    fn path_filter_group_two_overrides_key() {
        let dir = create_test_dir();
        let opts = IncludeOptions::new(dir.path())
            .with_flatten_directories(false)
            .with_exclude_dirs(compile_pattern(r"^\.git$").unwrap())
            .with_path_filter(compile_pattern(r"^/(admin)/(\w+)Controller\.json$").unwrap());
        let found = include_all(&opts).unwrap();

        assert_eq!(found.len(), 1);
        assert!(found.contains_key("Audit"));
    }

    #[test]
    fn missing_root_is_error_unless_optional() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = include_all(&IncludeOptions::new(&missing)).unwrap_err();
        assert!(matches!(err, IncludeError::DirectoryNotFound(_)));

        let found = include_all(&IncludeOptions::new(&missing).with_optional(true)).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn parse_failure_propagates() {
        let dir = create_test_dir();
        fs::write(dir.path().join("BrokenController.json"), "{ nope").unwrap();
        let err = include_all(&controllers(&dir)).unwrap_err();
        assert!(matches!(err, IncludeError::Parse { .. }));
    }

    #[test]
    fn relative_path_is_slash_prefixed() {
        let root = Path::new("/srv/app");
        assert_eq!(relative_path(root, Path::new("/srv/app/a/b.json")), "/a/b.json");
    }
}
