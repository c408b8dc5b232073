//! "Already shown" flags persisted as a small JSON file.
//!
//! Used so one-time experiences (like the trust flow intro) are offered once.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::ContentError;

pub const SEEN_FILE_NAME: &str = "seen.json";

/// Flag for the trust experience.
pub const TRUST_EXPERIENCE: &str = "trust-experience";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenFlags {
    path: PathBuf,
    flags: BTreeMap<String, DateTime<Utc>>,
}

impl SeenFlags {
    /// Load flags from `path`. A missing or blank file means nothing seen yet.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the file exists but cannot be read, or
    /// [`ContentError::Json`] if it is not a flag map.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ContentError> {
        let path = path.into();
        let flags = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, flags })
    }

    /// Load `seen.json` from `data_dir`.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_in(data_dir: &Path) -> Result<Self, ContentError> {
        Self::load(data_dir.join(SEEN_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn has_seen(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }

    #[must_use]
    pub fn seen_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.flags.get(key).copied()
    }

    /// Mark `key` seen. Returns `false` if it already was; the first
    /// timestamp is kept.
    pub fn mark_seen(&mut self, key: &str) -> bool {
        if self.has_seen(key) {
            return false;
        }
        self.flags.insert(key.to_string(), Utc::now());
        true
    }

    /// Write the flags back, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), ContentError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.flags)?)?;
        tracing::debug!(path = %self.path.display(), count = self.flags.len(), "saved seen flags");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let flags = SeenFlags::load_in(tmp.path()).expect("load");
        assert!(!flags.has_seen(TRUST_EXPERIENCE));
        assert_eq!(flags.path(), tmp.path().join("seen.json"));
    }

    #[test]
    fn mark_save_reload() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let dir = tmp.path().join("nested/data");

        let mut flags = SeenFlags::load_in(&dir).expect("load");
        assert!(flags.mark_seen(TRUST_EXPERIENCE));
        let first = flags.seen_at(TRUST_EXPERIENCE);
        assert!(!flags.mark_seen(TRUST_EXPERIENCE));
        assert_eq!(flags.seen_at(TRUST_EXPERIENCE), first);
        flags.save().expect("save");

        let reloaded = SeenFlags::load_in(&dir).expect("reload");
        assert!(reloaded.has_seen(TRUST_EXPERIENCE));
        assert_eq!(reloaded, flags);
    }

    #[test]
    fn blank_file_is_empty_and_garbage_errors() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("seen.json");

        std::fs::write(&path, "  \n").expect("write");
        assert!(!SeenFlags::load(&path).expect("load").has_seen("x"));

        std::fs::write(&path, "[1, 2]").expect("write");
        assert!(matches!(SeenFlags::load(&path), Err(ContentError::Json(_))));
    }
}
