//! Launch history: an append-only log, one item name per line, read back as
//! a frequency table.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default)]
pub struct UsageRanking {
    counts: HashMap<String, u32>,
    log_path: Option<PathBuf>,
}

impl UsageRanking {
    /// In-memory only; `record` never touches disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every line of the log at `path`. A missing or unreadable log is
    /// treated as empty history.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let counts = match fs::read_to_string(&path) {
            Ok(text) => count_lines(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not read history: {e}");
                HashMap::new()
            }
        };
        Self { counts, log_path: Some(path) }
    }

    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// True when no launch has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Bump `name` in memory and append it to the log.
    pub fn record(&mut self, name: &str) -> Result<()> {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
        match &self.log_path {
            Some(path) => append_line(path, name),
            None => Ok(()),
        }
    }
}

fn count_lines(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        *counts.entry(line.to_string()).or_insert(0) += 1;
    }
    counts
}

fn append_line(path: &Path, name: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open history {}", path.display()))?;
    writeln!(file, "{name}").with_context(|| format!("could not append to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let ranking = UsageRanking::load(dir.path().join("history"));
        assert!(ranking.is_empty());
        assert_eq!(ranking.count("firefox"), 0);
    }

    #[test]
    fn counts_repeated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history");
        fs::write(&path, "firefox\nfiles\nfirefox\n\nfirefox\n").unwrap();
        let ranking = UsageRanking::load(&path);
        assert_eq!(ranking.count("firefox"), 3);
        assert_eq!(ranking.count("files"), 1);
        assert_eq!(ranking.count("terminal"), 0);
    }

    #[test]
    fn record_appends_without_rewriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history");
        let mut ranking = UsageRanking::load(&path);
        ranking.record("files").unwrap();
        ranking.record("firefox").unwrap();
        ranking.record("files").unwrap();
        assert_eq!(ranking.count("files"), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "files\nfirefox\nfiles\n");

        let reloaded = UsageRanking::load(&path);
        assert_eq!(reloaded.count("files"), 2);
        assert_eq!(reloaded.count("firefox"), 1);
    }

    #[test]
    fn in_memory_ranking_records_without_a_file() {
        let mut ranking = UsageRanking::new();
        ranking.record("gimp").unwrap();
        assert!(!ranking.is_empty());
        assert_eq!(ranking.count("gimp"), 1);
    }
}
