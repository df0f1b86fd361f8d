//! Filesystem entry points.
//!
//! Each function presets the options for one common use and builds with
//! [`FsDiscover`]. The `*_with` forms deliver the outcome to a completion
//! callback instead of returning it.

use modict_types::Dictionary;

use crate::builder::DictionaryBuilder;
use crate::discover::{Discover, FsDiscover};
use crate::error::BuildResult;
use crate::options::BuildOptions;

/// Build with an explicit traversal collaborator and options as given.
pub fn build_dictionary<D: Discover>(options: BuildOptions, discover: D) -> BuildResult<Dictionary> {
    DictionaryBuilder::with_discover(discover).build(options)
}

/// [`build_dictionary`], delivering the outcome to `callback`.
pub fn build_dictionary_with<D, F, R>(options: BuildOptions, discover: D, callback: F) -> R
where
    D: Discover,
    F: FnOnce(BuildResult<Dictionary>) -> R,
{
    DictionaryBuilder::with_discover(discover).build_with(options, callback)
}

/// Index modules; a missing directory yields an empty dictionary.
pub fn optional(options: BuildOptions) -> BuildResult<Dictionary> {
    fs_build(options.with_optional(true))
}

/// Index modules; a missing directory is an error.
pub fn required(options: BuildOptions) -> BuildResult<Dictionary> {
    fs_build(options.with_optional(false))
}

/// Deep-merge every module into one object; a missing directory is empty.
pub fn aggregate(options: BuildOptions) -> BuildResult<Dictionary> {
    fs_build(options.with_aggregate(true).with_optional(true))
}

/// Record which modules exist without loading them.
pub fn exists(options: BuildOptions) -> BuildResult<Dictionary> {
    fs_build(options.with_dont_load(true).with_optional(true))
}

pub fn optional_with<F, R>(options: BuildOptions, callback: F) -> R
where
    F: FnOnce(BuildResult<Dictionary>) -> R,
{
    callback(optional(options))
}

pub fn required_with<F, R>(options: BuildOptions, callback: F) -> R
where
    F: FnOnce(BuildResult<Dictionary>) -> R,
{
    callback(required(options))
}

pub fn aggregate_with<F, R>(options: BuildOptions, callback: F) -> R
where
    F: FnOnce(BuildResult<Dictionary>) -> R,
{
    callback(aggregate(options))
}

pub fn exists_with<F, R>(options: BuildOptions, callback: F) -> R
where
    F: FnOnce(BuildResult<Dictionary>) -> R,
{
    callback(exists(options))
}

fn fs_build(options: BuildOptions) -> BuildResult<Dictionary> {
    DictionaryBuilder::<FsDiscover>::new().build(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use modict_include::{compile_pattern, IncludeError};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    /// A small app layout: controllers plus config, with a `.git` directory
    /// that must never be picked up.
    fn create_app() -> TempDir {
        let dir = TempDir::new().unwrap();

        let controllers = dir.path().join("api").join("controllers");
        fs::create_dir_all(&controllers).unwrap();
        fs::write(
            controllers.join("PageController.json"),
            r#"{"showHomePage": "PageController.showHomePage"}"#,
        )
        .unwrap();
        fs::write(
            controllers.join("UserController.json"),
            r#"{"login": "UserController.login", "logout": "UserController.logout"}"#,
        )
        .unwrap();
        fs::write(controllers.join("VideoController.json"), "{}").unwrap();
        fs::write(controllers.join(".gitkeep"), "").unwrap();

        let config = dir.path().join("config");
        fs::create_dir_all(&config).unwrap();
        fs::write(
            config.join("connections.json"),
            r#"{"connections": {"localDiskDb": {"adapter": "sails-disk"}}}"#,
        )
        .unwrap();
        fs::write(
            config.join("local.toml"),
            "[connections.localDiskDb]\nfile = \"db.json\"\n[session]\nsecret = \"blahblah\"\n",
        )
        .unwrap();
        fs::write(
            config.join("models.yaml"),
            "models:\n  connection: localDiskDb\n  schema: true\n  migrate: drop\n",
        )
        .unwrap();

        let git = config.join(".git");
        fs::create_dir_all(&git).unwrap();
        fs::write(git.join("config.json"), r#"{"leaked": true}"#).unwrap();

        dir
    }

    fn controllers(app: &TempDir) -> BuildOptions {
        BuildOptions::new(app.path().join("api").join("controllers"))
            .with_filter(compile_pattern(r"(.+)Controller\.json$").unwrap())
    }

    #[test]
    fn optional_loads_controllers() {
        let app = create_app();
        let dict = optional(controllers(&app)).unwrap();

        assert_eq!(
            dict.into_value(),
            json!({
                "page": {
                    "showHomePage": "PageController.showHomePage",
                    "identity": "page",
                    "globalId": "Page",
                },
                "user": {
                    "login": "UserController.login",
                    "logout": "UserController.logout",
                    "identity": "user",
                    "globalId": "User",
                },
                "video": {"identity": "video", "globalId": "Video"},
            })
        );
    }

    #[test]
    fn optional_missing_directory_is_empty() {
        let app = create_app();
        let dict = optional(BuildOptions::new(app.path().join("api").join("services"))).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn required_missing_directory_fails() {
        let app = create_app();
        let err = required(BuildOptions::new(app.path().join("api").join("services"))).unwrap_err();
        assert!(matches!(err, BuildError::Discover(IncludeError::DirectoryNotFound(_))));
    }

    #[test]
    fn aggregate_merges_config_and_skips_git() {
        let app = create_app();
        let dict = aggregate(BuildOptions::new(app.path().join("config"))).unwrap();

        assert_eq!(
            dict.into_value(),
            json!({
                "connections": {"localDiskDb": {"adapter": "sails-disk", "file": "db.json"}},
                "session": {"secret": "blahblah"},
                "models": {"connection": "localDiskDb", "schema": true, "migrate": "drop"},
            })
        );
    }

    #[test]
    fn aggregate_includes_git_when_exclusion_disabled() {
        let app = create_app();
        let opts = BuildOptions::new(app.path().join("config")).without_exclude_dirs();
        let dict = aggregate(opts).unwrap();

        assert_eq!(dict.get(".git"), Some(&json!({"config": {"leaked": true}})));
    }

    #[test]
    fn aggregate_rejects_array_documents() {
        let app = create_app();
        fs::write(app.path().join("config").join("routes.json"), r#"["GET /"]"#).unwrap();
        let err = aggregate(BuildOptions::new(app.path().join("config"))).unwrap_err();
        assert!(matches!(err, BuildError::AggregateType { ref filename, .. } if filename == "routes"));
    }

    #[test]
    fn exists_records_presence_by_filename() {
        let app = create_app();
        let dict = exists(controllers(&app)).unwrap();

        assert_eq!(
            dict.into_value(),
            json!({"Page": true, "User": true, "Video": true})
        );
    }

    #[test]
    fn callbacks_mirror_return_values() {
        let app = create_app();
        let count = optional_with(controllers(&app), |result| result.map(|d| d.len())).unwrap();
        assert_eq!(count, 3);

        let failed = required_with(BuildOptions::new(app.path().join("nope")), |result| result.is_err());
        assert!(failed);

        let merged = aggregate_with(BuildOptions::new(app.path().join("config")), |result| {
            result.map(|d| d.contains_key("models"))
        });
        assert!(merged.unwrap());

        let present = exists_with(controllers(&app), |result| result.map(|d| d.contains_key("Page")));
        assert!(present.unwrap());
    }

    #[test]
    fn build_dictionary_uses_given_collaborator() {
        let dict = build_dictionary(BuildOptions::new("anywhere"), FsDiscover);
        assert!(matches!(dict, Err(BuildError::Discover(IncludeError::DirectoryNotFound(_)))));

        let app = create_app();
        let keys = build_dictionary_with(controllers(&app), FsDiscover, |result| {
            result.map(|d| d.keys().cloned().collect::<Vec<_>>())
        });
        assert_eq!(keys.unwrap(), vec!["page", "user", "video"]);
    }
}
