//! Save operation: replace one document's header and body

use tracing::info;

use crate::content::{ContentFile, ContentRoot};
use crate::error::Result;
use crate::frontmatter::{self, Mapping};

/// Line break after the closing `---` plus one blank line, written before a
/// freshly supplied body.
const BODY_SEPARATOR: &str = "\n\n";

pub struct SaveOperation<'a> {
    root: &'a ContentRoot,
}

impl<'a> SaveOperation<'a> {
    pub fn new(root: &'a ContentRoot) -> Self {
        Self { root }
    }

    /// Overwrite the document with `header`. When `content` is `None` the
    /// stored body is kept byte for byte.
    pub fn execute(&self, slug: &str, header: &Mapping, content: Option<&str>) -> Result<ContentFile> {
        let file = self.root.locate(slug)?;

        let body = match content {
            Some(content) => format!("{BODY_SEPARATOR}{content}"),
            None => {
                let stored = self.root.read(&file)?;
                frontmatter::body_of(&stored).to_string()
            }
        };

        let text = frontmatter::serialize(header, &body)?;
        self.root.write(&file, &text)?;
        info!(path = %file.relative_path(), keys = header.len(), "saved document");
        Ok(file)
    }
}
