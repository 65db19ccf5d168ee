use std::io;
use std::path::{Path, PathBuf};

/// Name of the per-project data directory
pub const DATA_DIR_NAME: &str = ".tick";

/// Find the data directory by walking up from `start` looking for `.tick/`.
/// Falls back to `start/.tick`, which is created on the first write.
pub fn discover_data_dir(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return candidate;
        }
        if !current.pop() {
            return start.join(DATA_DIR_NAME);
        }
    }
}

/// Resolve the data directory from the `-C` override, or by discovery from
/// the current directory.
pub fn resolve_data_dir(dir_override: Option<&str>) -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match dir_override {
        Some(dir) => cwd.join(dir),
        None => discover_data_dir(&cwd),
    })
}
