// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings store: load on init, mutate through closures, persist on change

use crate::{CommandScript, ScriptError, ScriptId, Settings};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors from loading, validating, or persisting settings
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read settings {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write settings {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid settings file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("a script named `{0}` already exists")]
    DuplicateName(String),
    #[error("no script matches `{0}`")]
    NotFound(String),
}

/// Owner of the settings and script list.
///
/// Held by the top-level controller and handed out by reference. Every
/// successful mutation is written back before the new snapshot becomes
/// visible, so readers never observe unpersisted state.
pub struct ScriptStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<Settings>>,
}

impl ScriptStore {
    /// Load settings from `path`; a missing file yields defaults.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let settings = match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str::<Settings>(&text)
                .map_err(|source| StoreError::Parse { path: path.clone(), source })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Settings::default()
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        tracing::debug!(
            path = %path.display(),
            scripts = settings.scripts.len(),
            "loaded settings"
        );
        Ok(Self { path: Some(path), current: RwLock::new(Arc::new(settings)) })
    }

    /// A store that never touches disk.
    pub fn in_memory(settings: Settings) -> Self {
        Self { path: None, current: RwLock::new(Arc::new(settings)) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read-only view of the current settings.
    pub fn snapshot(&self) -> Arc<Settings> {
        Arc::clone(&self.current.read())
    }

    pub fn find(&self, key: &str) -> Option<CommandScript> {
        self.current.read().find(key).cloned()
    }

    /// Apply `f` to a copy of the settings, persist, then publish.
    ///
    /// If `f` or the write fails, the previous settings stay in effect.
    pub fn update<T>(
        &self,
        f: impl FnOnce(&mut Settings) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.current.write();
        let mut next = Settings::clone(&guard);
        let value = f(&mut next)?;
        self.persist(&next)?;
        *guard = Arc::new(next);
        Ok(value)
    }

    pub fn add_script(&self, script: CommandScript) -> Result<ScriptId, StoreError> {
        script.validate()?;
        self.update(|settings| {
            if settings.scripts.iter().any(|s| s.name.eq_ignore_ascii_case(&script.name)) {
                return Err(StoreError::DuplicateName(script.name.clone()));
            }
            let id = script.id.clone();
            tracing::info!(%id, name = %script.name, "adding script");
            settings.scripts.push(script);
            Ok(id)
        })
    }

    /// Edit a script in place; the result must still validate.
    pub fn update_script(
        &self,
        key: &str,
        f: impl FnOnce(&mut CommandScript),
    ) -> Result<CommandScript, StoreError> {
        self.update(|settings| {
            let idx = settings.position(key).ok_or_else(|| StoreError::NotFound(key.to_string()))?;
            let mut script = settings.scripts[idx].clone();
            f(&mut script);
            script.validate()?;
            let clash = settings
                .scripts
                .iter()
                .enumerate()
                .any(|(i, s)| i != idx && s.name.eq_ignore_ascii_case(&script.name));
            if clash {
                return Err(StoreError::DuplicateName(script.name));
            }
            settings.scripts[idx] = script.clone();
            Ok(script)
        })
    }

    pub fn remove_script(&self, key: &str) -> Result<CommandScript, StoreError> {
        self.update(|settings| {
            let idx = settings.position(key).ok_or_else(|| StoreError::NotFound(key.to_string()))?;
            let removed = settings.scripts.remove(idx);
            tracing::info!(id = %removed.id, name = %removed.name, "removed script");
            Ok(removed)
        })
    }

    pub fn set_enabled(&self, key: &str, enabled: bool) -> Result<CommandScript, StoreError> {
        self.update_script(key, |script| script.enabled = enabled)
    }

    fn persist(&self, settings: &Settings) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text = toml::to_string_pretty(settings)?;
        let write_err = |source| StoreError::Write { path: path.clone(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, text).map_err(write_err)?;
        std::fs::rename(&tmp, path).map_err(write_err)?;
        tracing::debug!(path = %path.display(), "persisted settings");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
