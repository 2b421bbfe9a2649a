//! Launchable items: `.desktop` discovery and the immutable catalog.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One launchable entry. `name` is lowercased at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    pub command: String,
}

/// Append-only list of items, referenced elsewhere by index only.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    seen: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-parsed `(name, exec)` pairs.
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, command) in pairs {
            catalog.push(name.into(), command.into());
        }
        catalog
    }

    /// Scan `dirs` for `*.desktop` files. Missing directories and unreadable
    /// entries are skipped.
    pub fn load(dirs: &[PathBuf]) -> Self {
        let mut catalog = Self::new();
        for dir in dirs {
            if !dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "application dir missing, skipped");
                continue;
            }
            let files = match desktop_files(dir) {
                Ok(files) => files,
                Err(e) => {
                    tracing::warn!("{e:#}");
                    continue;
                }
            };
            for path in files {
                match parse_desktop_file(&path) {
                    Ok(Some((name, exec))) => {
                        catalog.push(name, exec);
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!("{e:#}"),
                }
            }
        }
        catalog
    }

    /// Add an item unless the name is empty, the command is empty, or the
    /// case-folded name is already present. Returns whether it was added.
    pub fn push(&mut self, name: String, command: String) -> bool {
        let name = name.trim().to_lowercase();
        let command = command.trim().to_string();
        if name.is_empty() || command.is_empty() || self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.items.push(CatalogItem { name, command });
        true
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Name at `index`. Indices come from this catalog, so this only panics
    /// on a caller bug.
    pub fn name(&self, index: usize) -> &str {
        &self.items[index].name
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn desktop_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("could not list {}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "desktop"))
        .collect();
    files.sort();
    Ok(files)
}

/// Returns `Ok(None)` when the file has no usable `Name=`/`Exec=` pair.
pub fn parse_desktop_file(path: &Path) -> Result<Option<(String, String)>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read file: {}", path.display()))?;
    Ok(parse_desktop_entry(&text))
}

/// Last `Name=` and last `Exec=` line win.
pub fn parse_desktop_entry(text: &str) -> Option<(String, String)> {
    let mut name = None;
    let mut exec = None;
    for line in text.lines() {
        if let Some(v) = line.strip_prefix("Name=") {
            name = Some(v);
        } else if let Some(v) = line.strip_prefix("Exec=") {
            exec = Some(v);
        }
    }
    match (name, exec) {
        (Some(n), Some(e)) if !n.trim().is_empty() && !e.trim().is_empty() => {
            Some((n.to_string(), e.to_string()))
        }
        _ => None,
    }
}
