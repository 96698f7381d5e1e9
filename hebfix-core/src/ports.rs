//! Port traits abstracting storage away from the pipeline.

use camino::{Utf8Path, Utf8PathBuf};

/// Backing storage holding the serialized record collection.
pub trait RecordStore {
    /// Where the collection lives, for messages and patch headers.
    fn location(&self) -> &Utf8Path;

    fn read(&self) -> anyhow::Result<String>;

    /// Replace the stored contents in one write.
    fn write(&self, contents: &str) -> anyhow::Result<()>;

    /// Copy the current contents to `<location><suffix>`, returning that path.
    fn backup(&self, suffix: &str) -> anyhow::Result<Utf8PathBuf>;
}
