//! Default port implementations.

use crate::ports::RecordStore;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::cell::RefCell;
use tracing::debug;

/// JSON file on disk, overwritten in place.
#[derive(Debug, Clone)]
pub struct FsRecordStore {
    pub path: Utf8PathBuf,
}

impl FsRecordStore {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl RecordStore for FsRecordStore {
    fn location(&self) -> &Utf8Path {
        &self.path
    }

    fn read(&self) -> anyhow::Result<String> {
        fs::read_to_string(&self.path).with_context(|| format!("read {}", self.path))
    }

    fn write(&self, contents: &str) -> anyhow::Result<()> {
        fs::write(&self.path, contents).with_context(|| format!("write {}", self.path))
    }

    fn backup(&self, suffix: &str) -> anyhow::Result<Utf8PathBuf> {
        let target = Utf8PathBuf::from(format!("{}{}", self.path, suffix));
        fs::copy(&self.path, &target)
            .with_context(|| format!("copy {} to {}", self.path, target))?;
        debug!(from = %self.path, to = %target, "wrote backup");
        Ok(target)
    }
}

/// In-memory store for embedding and testing.
///
/// Records every write and backup so callers can inspect what the pipeline did.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    location: Utf8PathBuf,
    contents: RefCell<Option<String>>,
    backups: RefCell<Vec<(Utf8PathBuf, String)>>,
    writes: RefCell<usize>,
    read_only: bool,
}

impl InMemoryRecordStore {
    pub fn new(location: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            contents: RefCell::new(Some(contents.into())),
            ..Default::default()
        }
    }

    /// A store with nothing at its location; reads fail.
    pub fn missing(location: impl Into<Utf8PathBuf>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    /// Writes and backups fail, as on a read-only volume.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    pub fn backups(&self) -> Vec<(Utf8PathBuf, String)> {
        self.backups.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn location(&self) -> &Utf8Path {
        &self.location
    }

    fn read(&self) -> anyhow::Result<String> {
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", self.location))
    }

    fn write(&self, contents: &str) -> anyhow::Result<()> {
        if self.read_only {
            anyhow::bail!("read-only store: {}", self.location);
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn backup(&self, suffix: &str) -> anyhow::Result<Utf8PathBuf> {
        if self.read_only {
            anyhow::bail!("read-only store: {}", self.location);
        }
        let current = self.read()?;
        let target = Utf8PathBuf::from(format!("{}{}", self.location, suffix));
        self.backups.borrow_mut().push((target.clone(), current));
        Ok(target)
    }
}
