use crate::error::IndexError;
use crate::index::DocIndex;
use crate::indexer::tokens::TokenExtractor;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

/// Builds a [`DocIndex`] from a documentation tree in a single pass.
#[derive(Debug, Clone)]
pub struct Indexer {
    extractor: TokenExtractor,
}

impl Indexer {
    pub fn new(extractor: TokenExtractor) -> Self {
        Self { extractor }
    }

    /// Shortcut for `Indexer::new(TokenExtractor::new(pattern)?)`.
    pub fn from_pattern(pattern: &str) -> Result<Self, IndexError> {
        Ok(Self::new(TokenExtractor::new(pattern)?))
    }

    /// Whether a file name ends in `.md` or `.markdown`, ignoring case.
    pub fn is_markdown(file_name: &OsStr) -> bool {
        let name = file_name.to_string_lossy().to_ascii_lowercase();
        name.ends_with(".md") || name.ends_with(".markdown")
    }

    /// Walks `root` recursively and indexes every Markdown file.
    ///
    /// Entries within a directory are visited in lexical file-name order,
    /// which fixes the order of paths in each token's list. Any walk or read
    /// error aborts the whole build.
    pub fn build<P: AsRef<Path>>(&self, root: P) -> Result<DocIndex, IndexError> {
        let root = root.as_ref();
        let mut index = DocIndex::default();

        // Plain recursive walk: no .gitignore handling, hidden files included.
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }
            if !Self::is_markdown(entry.file_name()) {
                continue;
            }

            let path = entry.path();
            let bytes = std::fs::read(path).map_err(|source| IndexError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let content = String::from_utf8_lossy(&bytes);

            let tokens = self.extractor.extract(&content);
            if tokens.is_empty() {
                continue;
            }
            debug!("{}: {} tokens", path.display(), tokens.len());

            for token in tokens {
                index.record(token, path);
            }
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const PATTERN: &str = "google_compute_instance|aws_s3_bucket";

    #[test]
    fn test_is_markdown() {
        assert!(Indexer::is_markdown(OsStr::new("a.md")));
        assert!(Indexer::is_markdown(OsStr::new("A.MD")));
        assert!(Indexer::is_markdown(OsStr::new("guide.Markdown")));
        assert!(!Indexer::is_markdown(OsStr::new("main.tf")));
        assert!(!Indexer::is_markdown(OsStr::new("notes.mdx")));
        assert!(!Indexer::is_markdown(OsStr::new("md")));
    }

    #[test]
    fn test_build_maps_tokens_to_files() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("a.md"), r#"resource "google_compute_instance" "x" {}"#).unwrap();
        fs::write(dir.join("b.md"), r#"resource "aws_s3_bucket" "y" {}"#).unwrap();

        let index = Indexer::from_pattern(PATTERN).unwrap().build(dir).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("google_compute_instance").unwrap(),
            &[dir.join("a.md")]
        );
        assert_eq!(index.get("aws_s3_bucket").unwrap(), &[dir.join("b.md")]);
    }

    #[test]
    fn test_build_skips_non_markdown() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("main.tf"), "google_compute_instance").unwrap();
        fs::write(dir.join("notes.txt"), "aws_s3_bucket").unwrap();
        fs::write(dir.join("README.MARKDOWN"), "aws_s3_bucket").unwrap();

        let index = Indexer::from_pattern(PATTERN).unwrap().build(dir).unwrap();

        assert!(index.get("google_compute_instance").is_none());
        assert_eq!(
            index.get("aws_s3_bucket").unwrap(),
            &[dir.join("README.MARKDOWN")]
        );
    }

    #[test]
    fn test_build_lists_file_once_per_token() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();
        fs::write(
            dir.join("a.md"),
            "aws_s3_bucket\naws_s3_bucket\naws_s3_bucket\n",
        )
        .unwrap();

        let index = Indexer::from_pattern(PATTERN).unwrap().build(dir).unwrap();
        assert_eq!(index.get("aws_s3_bucket").unwrap(), &[dir.join("a.md")]);
    }

    #[test]
    fn test_build_walks_recursively_in_lexical_order() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();
        fs::create_dir_all(dir.join("r/compute")).unwrap();
        fs::create_dir_all(dir.join("d")).unwrap();
        fs::write(dir.join("r/compute/instance.md"), "google_compute_instance").unwrap();
        fs::write(dir.join("d/instance.md"), "google_compute_instance").unwrap();
        fs::write(dir.join("index.md"), "google_compute_instance").unwrap();

        let index = Indexer::from_pattern(PATTERN).unwrap().build(dir).unwrap();

        let expected: Vec<PathBuf> = vec![
            dir.join("d/instance.md"),
            dir.join("index.md"),
            dir.join("r/compute/instance.md"),
        ];
        assert_eq!(index.get("google_compute_instance").unwrap(), expected.as_slice());
    }

    #[test]
    fn test_build_without_matches_is_empty() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.md"), "# Nothing here").unwrap();

        let index = Indexer::from_pattern(PATTERN)
            .unwrap()
            .build(temp_dir.path())
            .unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_missing_root_fails() {
        let temp_dir = tempdir().unwrap();
        let result = Indexer::from_pattern(PATTERN)
            .unwrap()
            .build(temp_dir.path().join("does-not-exist"));
        assert!(matches!(result, Err(IndexError::Walk(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_build_unreadable_file_fails() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("a.md"), "aws_s3_bucket").unwrap();
        std::os::unix::fs::symlink(dir.join("gone.md"), dir.join("broken.md")).unwrap();

        let result = Indexer::from_pattern(PATTERN).unwrap().build(dir);
        match result {
            Err(IndexError::Read { path, .. }) => assert_eq!(path, dir.join("broken.md")),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            Indexer::from_pattern("aws_(s3"),
            Err(IndexError::InvalidPattern(_))
        ));
    }
}
