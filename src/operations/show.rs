//! Show operation: load one document by slug

use serde::Serialize;

use crate::content::{ContentDir, ContentFile, ContentRoot};
use crate::error::Result;
use crate::frontmatter::{self, Document, Mapping};
use crate::seo::SeoReport;

use super::audit::analyze_document;

/// A single loaded document, as returned to editors.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    #[serde(rename = "frontmatter")]
    pub header: Mapping,
    pub content: String,
    pub slug: String,
    pub path: String,
    pub directory: ContentDir,
    /// Whether duplicate keys had to be dropped to read the header.
    pub repaired: bool,
    #[serde(skip)]
    pub dropped_keys: Vec<String>,
    #[serde(skip)]
    document: Document,
}

impl DocumentView {
    fn new(file: &ContentFile, document: Document, dropped_keys: Vec<String>) -> Self {
        DocumentView {
            header: document.header.clone(),
            content: document.content().to_string(),
            slug: file.slug.clone(),
            path: file.relative_path(),
            directory: file.directory,
            repaired: !dropped_keys.is_empty(),
            dropped_keys,
            document,
        }
    }

    pub fn report(&self) -> SeoReport {
        analyze_document(&self.document)
    }
}

pub struct ShowOperation<'a> {
    root: &'a ContentRoot,
}

impl<'a> ShowOperation<'a> {
    pub fn new(root: &'a ContentRoot) -> Self {
        Self { root }
    }

    /// Locate and parse a document. Duplicate keys are repaired in memory
    /// only; the file is left as it is.
    pub fn execute(&self, slug: &str) -> Result<DocumentView> {
        let file = self.root.locate(slug)?;
        let text = self.root.read(&file)?;
        let recovered = frontmatter::parse_or_repair(&text)?;
        Ok(DocumentView::new(
            &file,
            recovered.document,
            recovered.dropped_keys,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrontmatterError;
    use tempfile::TempDir;

    fn setup(rel: &str, text: &str) -> (TempDir, ContentRoot) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
        let root = ContentRoot::new(temp.path());
        (temp, root)
    }

    #[test]
    fn test_show_strips_leading_blank_lines() {
        let (_temp, root) = setup("articles/guide.mdx", "---\ntitle: Guide\n---\n\n# Guide\n");
        let view = ShowOperation::new(&root).execute("guide").unwrap();
        assert_eq!(view.content, "# Guide\n");
        assert_eq!(view.path, "articles/guide.mdx");
        assert!(!view.repaired);
    }

    #[test]
    fn test_show_repairs_in_memory_only() {
        let text = "---\ntitle: First\ntitle: Second\n---\nBody";
        let (temp, root) = setup("recipes/dup.mdx", text);
        let view = ShowOperation::new(&root).execute("dup").unwrap();
        assert!(view.repaired);
        assert_eq!(view.dropped_keys, ["title"]);
        assert_eq!(view.header.get_str("title").as_deref(), Some("First"));
        let on_disk = std::fs::read_to_string(temp.path().join("recipes/dup.mdx")).unwrap();
        assert_eq!(on_disk, text);
    }

    #[test]
    fn test_show_json_shape() {
        let (_temp, root) = setup("posts/hello.mdx", "---\ntitle: Hello\ntags: [a]\n---\nHi");
        let view = ShowOperation::new(&root).execute("hello").unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["frontmatter"]["title"], "Hello");
        assert_eq!(json["frontmatter"]["tags"], serde_json::json!(["a"]));
        assert_eq!(json["content"], "Hi");
        assert_eq!(json["directory"], "posts");
        assert!(json.get("dropped_keys").is_none());
    }

    #[test]
    fn test_show_malformed_document() {
        let (_temp, root) = setup("posts/raw.mdx", "no header");
        let err = ShowOperation::new(&root).execute("raw").unwrap_err();
        assert!(matches!(err, FrontmatterError::MalformedDocument { .. }));
    }
}
