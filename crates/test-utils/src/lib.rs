//! Shared test utilities for tplscore crates.
//!
//! Provides sample templates, a temporary HOME with input files, and guards
//! for tests that touch process-global environment variables.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tplscore_scoring::{Template, UserHistory};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = tplscore_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value" until _guard drops
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// The "React Dashboard" template used across tagger and CLI tests.
pub fn react_dashboard() -> Template {
    Template {
        id: "react-dashboard".to_string(),
        title: "React Dashboard".to_string(),
        description: "A Next.js TypeScript dashboard with Tailwind CSS".to_string(),
        content: Some(String::new()),
        category: "dashboard".to_string(),
        tags: vec!["react".into(), "nextjs".into(), "tailwindcss".into()],
        views: 240,
        generations: 60,
        rating: Some(4.7),
    }
}

/// A small catalog covering several categories and popularity levels.
pub fn sample_catalog() -> Vec<Template> {
    vec![
        react_dashboard(),
        Template {
            id: "svelte-blog".to_string(),
            title: "Svelte Markdown Blog".to_string(),
            description: "A minimal blog with markdown posts and RSS.".to_string(),
            category: "blog".to_string(),
            tags: vec!["svelte".into(), "blog".into()],
            views: 40,
            generations: 4,
            ..Default::default()
        },
        Template {
            id: "stripe-saas".to_string(),
            title: "SaaS Starter with Stripe Billing".to_string(),
            description: "Subscription billing, authentication, and a Postgres database."
                .to_string(),
            category: "saas".to_string(),
            tags: vec!["nextjs".into(), "payments".into(), "database".into()],
            views: 1200,
            generations: 310,
            rating: Some(4.9),
            ..Default::default()
        },
        Template {
            id: "untitled".to_string(),
            title: "x".to_string(),
            ..Default::default()
        },
    ]
}

/// History of a user who likes dashboards and React tooling.
pub fn dashboard_fan() -> UserHistory {
    UserHistory {
        viewed_templates: vec!["react-dashboard".to_string()],
        favorite_categories: vec!["dashboard".to_string(), "saas".to_string()],
        favorite_tags: vec!["react".to_string(), "nextjs".to_string()],
    }
}

/// Standard test fixture with a temporary HOME.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to ~/.tplscore in the temp environment
    pub config_dir: PathBuf,
}

impl TestFixture {
    /// Create a new fixture with `$HOME/.tplscore/` created.
    ///
    /// Does NOT set HOME env var - use `home_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let config_dir = tempdir.path().join(".tplscore");
        std::fs::create_dir_all(&config_dir)?;
        Ok(Self {
            tempdir,
            config_dir,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home_path().to_str().unwrap()))
    }

    /// Write `~/.tplscore/config.toml`.
    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        let path = self.config_dir.join("config.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write templates as a JSON array under the fixture root.
    pub fn write_templates(&self, name: &str, templates: &[Template]) -> std::io::Result<PathBuf> {
        let json = serde_json::to_string_pretty(templates)?;
        self.write_file(name, &json)
    }

    /// Write a user history record as JSON under the fixture root.
    pub fn write_history(&self, name: &str, history: &UserHistory) -> std::io::Result<PathBuf> {
        let json = serde_json::to_string_pretty(history)?;
        self.write_file(name, &json)
    }

    /// Write an arbitrary file under the fixture root.
    pub fn write_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.home_path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}
