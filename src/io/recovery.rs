use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::io::store::atomic_write;

/// Past this size the oldest entries are dropped before the next append.
const MAX_LOG_SIZE: u64 = 1_048_576;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- tick recovery log: append-only error recovery data
     This file captures data that tick couldn't load or save normally.
     If a todo went missing, check here.
     View with: tick recovery
     Safe to delete if empty or stale. -->

---
";

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Category of a recovery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCategory {
    /// A stored value could not be parsed and was replaced
    Parser,
    /// A value could not be written to the store
    Write,
}

impl fmt::Display for RecoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryCategory::Parser => write!(f, "parser"),
            RecoveryCategory::Write => write!(f, "write"),
        }
    }
}

/// A single entry in the recovery log.
#[derive(Debug, Clone)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

impl RecoveryEntry {
    /// Build an entry stamped with the current time
    pub fn now(
        category: RecoveryCategory,
        description: impl Into<String>,
        fields: Vec<(String, String)>,
        body: impl Into<String>,
    ) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description: description.into(),
            fields,
            body: body.into(),
        }
    }

    /// Format this entry as a markdown block for the recovery log.
    fn to_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "## {} — {}: {}\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        ));
        out.push('\n');

        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        // Body as fenced code block
        if !self.body.is_empty() {
            out.push('\n');
            out.push_str("```text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out.push('\n');
        out.push_str("---\n");
        out
    }
}

/// Return the path to the recovery log file.
pub fn recovery_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".recovery.log")
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Append a recovery entry to the log. Errors are swallowed and printed to stderr.
pub fn log_recovery(data_dir: &Path, entry: RecoveryEntry) {
    if let Err(e) = log_recovery_inner(data_dir, entry) {
        eprintln!("warning: could not write to recovery log: {}", e);
    }
}

fn log_recovery_inner(data_dir: &Path, entry: RecoveryEntry) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let path = recovery_log_path(data_dir);

    if let Ok(meta) = fs::metadata(&path)
        && meta.len() > MAX_LOG_SIZE
    {
        trim_log_file(&path)?;
    }

    let needs_header = fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }

    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

/// Rewrite the log keeping only the newest entries that fit in half the cap.
fn trim_log_file(path: &Path) -> io::Result<()> {
    let content = fs::read_to_string(path)?;
    let trimmed = trim_entries(&content, (MAX_LOG_SIZE / 2) as usize);
    if trimmed.len() < content.len() {
        atomic_write(path, trimmed.as_bytes())?;
    }
    Ok(())
}

/// Drop the oldest entries until the log fits in `max_len` bytes. The header
/// and the newest entry are always kept.
fn trim_entries(content: &str, max_len: usize) -> String {
    let mut starts: Vec<usize> = content.match_indices("\n## ").map(|(i, _)| i + 1).collect();
    if content.starts_with("## ") {
        starts.insert(0, 0);
    }
    let Some(&first) = starts.first() else {
        return content.to_string();
    };
    let header = &content[..first];

    let mut keep_from = content.len();
    for &start in starts.iter().rev() {
        let fits = header.len() + (content.len() - start) <= max_len;
        if !fits && keep_from < content.len() {
            break;
        }
        keep_from = start;
    }
    format!("{}{}", header, &content[keep_from..])
}

/// Read the whole recovery log. `None` when there is no log yet.
pub fn read_recovery_log(data_dir: &Path) -> Option<String> {
    let content = fs::read_to_string(recovery_log_path(data_dir)).ok()?;
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

/// Number of entries in the log
pub fn count_entries(log: &str) -> usize {
    log.lines().filter(|l| l.starts_with("## ")).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn entry(category: RecoveryCategory, body: &str) -> RecoveryEntry {
        RecoveryEntry {
            timestamp: Utc.with_ymd_and_hms(2025, 5, 14, 10, 0, 0).unwrap(),
            category,
            description: "unreadable todos".into(),
            fields: vec![("Key".into(), "todos".into())],
            body: body.into(),
        }
    }

    #[test]
    fn markdown_format() {
        let md = entry(RecoveryCategory::Parser, "[{oops").to_markdown();
        assert!(md.starts_with("## 2025-05-14T10:00:00Z — parser: unreadable todos\n"));
        assert!(md.contains("Key: todos\n"));
        assert!(md.contains("```text\n[{oops\n```\n"));
        assert!(md.ends_with("---\n"));
    }

    #[test]
    fn empty_body_has_no_fence() {
        let md = entry(RecoveryCategory::Write, "").to_markdown();
        assert!(!md.contains("```"));
    }

    #[test]
    fn header_written_once() {
        let dir = TempDir::new().unwrap();
        log_recovery(dir.path(), entry(RecoveryCategory::Parser, "a"));
        log_recovery(dir.path(), entry(RecoveryCategory::Write, "b"));

        let log = read_recovery_log(dir.path()).unwrap();
        assert_eq!(log.matches("tick recovery log").count(), 1);
        assert_eq!(count_entries(&log), 2);
        assert!(log.contains("write: unreadable todos"));
    }

    #[test]
    fn trim_drops_oldest_entries() {
        let mut log = String::from(FILE_HEADER);
        for body in ["first", "second", "third"] {
            log.push_str(&entry(RecoveryCategory::Write, body).to_markdown());
        }
        let one_entry = entry(RecoveryCategory::Write, "third").to_markdown().len();

        let trimmed = trim_entries(&log, FILE_HEADER.len() + 2 * one_entry + 1);
        assert!(trimmed.starts_with(FILE_HEADER));
        assert_eq!(count_entries(&trimmed), 2);
        assert!(!trimmed.contains("first"));
        assert!(trimmed.contains("second"));
        assert!(trimmed.ends_with(&entry(RecoveryCategory::Write, "third").to_markdown()));

        // Under the limit nothing changes
        assert_eq!(trim_entries(&log, log.len()), log);
    }

    #[test]
    fn trim_keeps_newest_entry_even_if_oversized() {
        let mut log = String::from(FILE_HEADER);
        log.push_str(&entry(RecoveryCategory::Write, "old").to_markdown());
        log.push_str(&entry(RecoveryCategory::Write, &"x".repeat(500)).to_markdown());

        let trimmed = trim_entries(&log, 100);
        assert_eq!(count_entries(&trimmed), 1);
        assert!(trimmed.contains(&"x".repeat(500)));
    }

    #[test]
    fn oversized_log_is_trimmed_before_append() {
        let dir = TempDir::new().unwrap();
        let big = "y".repeat(MAX_LOG_SIZE as usize / 2 + 1);
        log_recovery(dir.path(), entry(RecoveryCategory::Write, &big));
        log_recovery(dir.path(), entry(RecoveryCategory::Write, &big));
        log_recovery(dir.path(), entry(RecoveryCategory::Write, "small"));

        let log = read_recovery_log(dir.path()).unwrap();
        assert!((log.len() as u64) < MAX_LOG_SIZE);
        assert_eq!(count_entries(&log), 2);
        assert!(log.ends_with(&entry(RecoveryCategory::Write, "small").to_markdown()));
    }

    #[test]
    fn missing_log_reads_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_recovery_log(dir.path()).is_none());
    }

    #[test]
    fn creates_data_dir_if_needed() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join(".tick");
        log_recovery(&nested, entry(RecoveryCategory::Write, "x"));
        assert!(recovery_log_path(&nested).exists());
    }
}
