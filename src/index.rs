//! In-memory token → documents index.
//!
//! Built once by [`crate::indexer::Indexer`] and then shared read-only
//! (behind an `Arc`) with every lookup request.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Maps each extracted token to the documents containing it.
///
/// Paths are kept in discovery order and never repeat within a token.
/// Tokens that matched no document have no entry.
#[derive(Debug, Default, Clone)]
pub struct DocIndex {
    entries: BTreeMap<String, Vec<PathBuf>>,
}

/// Summary numbers reported after a build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Distinct tokens.
    pub tokens: usize,
    /// Distinct documents referenced by any token.
    pub files: usize,
    /// Total (token, document) pairs.
    pub postings: usize,
}

impl DocIndex {
    /// Record that `path` contains `token`.
    ///
    /// Callers pass each (token, path) pair once: the walk visits every file
    /// once and the extractor yields distinct tokens per file.
    pub(crate) fn record(&mut self, token: &str, path: &Path) {
        let paths = self.entries.entry(token.to_owned()).or_default();
        debug_assert!(
            paths.last().map(PathBuf::as_path) != Some(path),
            "duplicate ({token}, {}) pair",
            path.display()
        );
        paths.push(path.to_path_buf());
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&[PathBuf]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens in sorted order with their documents.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.entries
            .iter()
            .map(|(token, paths)| (token.as_str(), paths.as_slice()))
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        let files: HashSet<&PathBuf> = self.entries.values().flatten().collect();
        IndexStats {
            tokens: self.entries.len(),
            files: files.len(),
            postings: self.entries.values().map(Vec::len).sum(),
        }
    }

    /// Log the index contents for operators: one line per token, paths at debug level.
    /// The token count is always logged, even when it is zero.
    pub fn log_summary(&self) -> IndexStats {
        let stats = self.stats();
        info!(
            "Found {} unique providers in documentation ({} files, {} references)",
            stats.tokens, stats.files, stats.postings
        );
        for (token, paths) in self.iter() {
            info!("Found provider '{token}' in {} files", paths.len());
            for path in paths {
                debug!("  - {}", path.display());
            }
        }
        stats
    }
}
