//! Document retrieval for a single token.
//!
//! Reads every document listed for the token from disk (never cached),
//! strips front matter and joins the bodies with [`DOC_SEPARATOR`].

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::LookupError;
use crate::frontmatter;
use crate::index::DocIndex;

/// Appended after every document in a lookup result, including the last one.
pub const DOC_SEPARATOR: &str = "\n\n---\n\n";

/// Fetch and concatenate all documents containing `token`.
///
/// `cancel` is checked before each file read; once it fires the remaining
/// documents are skipped and [`LookupError::Cancelled`] is returned.
pub async fn lookup(
    index: &DocIndex,
    token: &str,
    cancel: &CancellationToken,
) -> Result<String, LookupError> {
    if token.is_empty() {
        return Err(LookupError::InvalidArgument);
    }

    let paths = match index.get(token) {
        Some(paths) if !paths.is_empty() => paths,
        _ => return Err(LookupError::NotFound(token.to_string())),
    };

    let mut result = String::new();
    for path in paths {
        if cancel.is_cancelled() {
            return Err(LookupError::Cancelled(token.to_string()));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| LookupError::Read {
                path: path.clone(),
                source,
            })?;
        let content = String::from_utf8_lossy(&bytes);

        let body = frontmatter::strip(&content).map_err(|source| LookupError::FrontMatter {
            path: path.clone(),
            source,
        })?;

        result.push_str(body);
        result.push_str(DOC_SEPARATOR);
    }

    debug!("lookup '{token}': {} documents, {} bytes", paths.len(), result.len());
    Ok(result)
}
