//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::load_config;
use crate::config::schema::AppConfig;

/// Shared handle to the current configuration snapshot.
///
/// Readers get an `Arc` to a frozen model; a reload swaps the whole
/// snapshot atomically and never mutates fields in place, so resolvers
/// stay lock-free on every thread.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<ArcSwap<AppConfig>>,
}

impl ConfigHandle {
    /// Wrap an already-loaded model.
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<AppConfig> {
        self.inner.load_full()
    }

    /// Replace the snapshot with a freshly loaded model.
    pub fn replace(&self, config: AppConfig) {
        self.inner.store(Arc::new(config));
    }
}

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    handle: ConfigHandle,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher feeding the given handle.
    pub fn new(path: &Path, handle: ConfigHandle) -> Self {
        Self {
            path: path.to_path_buf(),
            handle,
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive; dropping it stops the
    /// notifications. A reload that fails leaves the current snapshot in
    /// place.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let handle = self.handle.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        match load_config(&path) {
                            Ok(new_config) => {
                                handle.replace(new_config);
                                tracing::info!(path = %path.display(), "configuration reloaded");
                            }
                            Err(e) => {
                                tracing::error!(
                                    path = %path.display(),
                                    error = %e,
                                    "reload failed, keeping current configuration"
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!(error = %e, "watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %self.path.display(), "config watcher started");
        Ok(watcher)
    }
}
