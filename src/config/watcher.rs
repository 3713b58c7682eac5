//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::AppConfig;

/// Watches the configuration file and emits every valid new version.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<AppConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<AppConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching. Dropping the returned handle stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let ConfigWatcher { path, update_tx } = self;
        let reload_path = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    reload(&reload_path, &update_tx);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Config watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path, tx: &mpsc::UnboundedSender<AppConfig>) {
    tracing::info!(path = ?path, "Config file changed, reloading");
    match load_config(path) {
        Ok(config) => {
            if tx.send(config).is_err() {
                tracing::warn!("Config update receiver dropped");
            }
        }
        Err(e) => tracing::error!(error = %e, "Config reload failed, keeping current configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_sends_valid_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "environment = \"test\"\n").unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        reload(file.path(), &tx);
        assert_eq!(rx.try_recv().unwrap().resolved_domain(), "test.host");
    }

    #[test]
    fn test_reload_skips_invalid_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "environment = \"production\"\n").unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        reload(file.path(), &tx);
        assert!(rx.try_recv().is_err());
    }
}
