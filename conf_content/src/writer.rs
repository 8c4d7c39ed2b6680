use std::path::PathBuf;

use crate::{content::ContentDocument, error::ContentError};

pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Renders a document as YAML front matter between delimiter lines, followed by the body.
pub fn render_document(document: &ContentDocument) -> Result<String, ContentError> {
    let front_matter = serde_yaml::to_string(&document.front_matter)?;

    Ok(format!(
        "{delim}\n{front_matter}{delim}\n{body}",
        delim = FRONT_MATTER_DELIMITER,
        front_matter = front_matter,
        body = document.body
    ))
}

/// Writes documents below a fixed output directory.
#[derive(Debug, Clone)]
pub struct ContentWriter {
    output_dir: PathBuf,
}

impl ContentWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ContentWriter {
            output_dir: output_dir.into(),
        }
    }

    /// Writes `document`, replacing any existing file. Returns the full path written.
    pub fn write(&self, document: &ContentDocument) -> Result<PathBuf, ContentError> {
        let rendered = render_document(document)?;
        let target = self.output_dir.join(&document.path);

        if let Some(dir) = target.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ContentError::filesystem(dir, e))?;
        }
        std::fs::write(&target, rendered).map_err(|e| ContentError::filesystem(&target, e))?;

        tracing::debug!("Wrote {}", target.display());
        Ok(target)
    }
}
