use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};

/// Error type for store I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize store: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("store is read-only")]
    ReadOnly,
}

/// Durable string key-value storage, the local-storage of this app.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite `key`. The in-memory value is updated even if the write to
    /// durable storage fails.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Directory for the recovery log, when the store lives on disk
    fn log_dir(&self) -> Option<&Path> {
        None
    }
}

// ---------------------------------------------------------------------------
// File store
// ---------------------------------------------------------------------------

/// Store backed by one JSON object file (`store.json`) in the data directory.
/// The whole file is rewritten atomically on every `set`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    entries: IndexMap<String, String>,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "store.json";

    /// Open the store in `dir`. A missing file is an empty store. A file that
    /// is not a UTF-8 JSON document is moved to the recovery log and the store
    /// starts empty.
    pub fn open(dir: &Path) -> Result<FileStore, StoreError> {
        let path = dir.join(Self::FILE_NAME);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::ReadError { path, source: e }),
        };

        let entries = if bytes.is_empty() {
            IndexMap::new()
        } else {
            match parse_entries(&bytes) {
                Ok(entries) => entries,
                Err(reason) => {
                    log_recovery(
                        dir,
                        RecoveryEntry::now(
                            RecoveryCategory::Parser,
                            "unreadable store file",
                            vec![
                                ("Source".to_string(), Self::FILE_NAME.to_string()),
                                ("Error".to_string(), reason),
                            ],
                            String::from_utf8_lossy(&bytes),
                        ),
                    );
                    IndexMap::new()
                }
            }
        };

        Ok(FileStore {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(Self::FILE_NAME)
    }

    fn flush(&self) -> Result<(), StoreError> {
        let path = self.path();
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::create_dir_all(&self.dir)
            .and_then(|_| atomic_write(&path, content.as_bytes()))
            .map_err(|e| StoreError::WriteError { path, source: e })
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn log_dir(&self) -> Option<&Path> {
        Some(&self.dir)
    }
}

fn parse_entries(bytes: &[u8]) -> Result<IndexMap<String, String>, String> {
    let text = std::str::from_utf8(bytes).map_err(|e| format!("not UTF-8: {}", e))?;
    serde_json::from_str(text).map_err(|e| e.to_string())
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Memory store
// ---------------------------------------------------------------------------

/// Non-durable store. With `read_only` set every `set` fails after updating
/// memory, which is how a full disk looks to callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub entries: IndexMap<String, String>,
    pub read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        Ok(())
    }
}
