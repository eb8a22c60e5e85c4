//! Content directory access
//!
//! Documents live under a content root as `<dir>/<slug>.mdx`, where `<dir>`
//! is one of [`ContentDir::ALL`]. The filesystem is the system of record:
//! nothing here caches, and writes replace files atomically.

use std::fmt;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{
    Result, document_not_found, file_read_failed, file_write_failed, invalid_slug, io_error,
};

/// File extension of content documents.
pub const EXTENSION: &str = "mdx";

/// A content subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDir {
    Recipes,
    Articles,
    Posts,
}

impl ContentDir {
    /// Lookup order for slugs.
    pub const ALL: [ContentDir; 3] = [ContentDir::Recipes, ContentDir::Articles, ContentDir::Posts];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentDir::Recipes => "recipes",
            ContentDir::Articles => "articles",
            ContentDir::Posts => "posts",
        }
    }
}

impl fmt::Display for ContentDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One document file under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    pub slug: String,
    pub directory: ContentDir,
    pub path: PathBuf,
}

impl ContentFile {
    /// Path relative to the content root, with `/` separators.
    pub fn relative_path(&self) -> String {
        format!("{}/{}.{EXTENSION}", self.directory, self.slug)
    }
}

/// Root directory holding the content subdirectories.
#[derive(Debug, Clone)]
pub struct ContentRoot {
    root: PathBuf,
}

impl ContentRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ContentRoot { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// List documents in the given directories, in directory order and then
    /// by file name. Missing directories are skipped.
    pub fn list(&self, dirs: &[ContentDir]) -> Result<Vec<ContentFile>> {
        let mut files = Vec::new();
        for &directory in dirs {
            let dir_path = self.root.join(directory.as_str());
            if !dir_path.is_dir() {
                debug!(dir = %dir_path.display(), "content directory missing, skipping");
                continue;
            }

            let walker = WalkDir::new(&dir_path)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name();
            for entry in walker {
                let entry = entry.map_err(|e| io_error(e.to_string()))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                    continue;
                }
                let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                files.push(ContentFile {
                    slug: slug.to_string(),
                    directory,
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(files)
    }

    /// List documents in every content directory.
    pub fn list_all(&self) -> Result<Vec<ContentFile>> {
        self.list(&ContentDir::ALL)
    }

    /// Find a document by slug, trying each directory in lookup order.
    pub fn locate(&self, slug: &str) -> Result<ContentFile> {
        validate_slug(slug)?;
        for directory in ContentDir::ALL {
            let path = self
                .root
                .join(directory.as_str())
                .join(format!("{slug}.{EXTENSION}"));
            if path.is_file() {
                return Ok(ContentFile {
                    slug: slug.to_string(),
                    directory,
                    path,
                });
            }
        }
        Err(document_not_found(slug))
    }

    pub fn read(&self, file: &ContentFile) -> Result<String> {
        std::fs::read_to_string(&file.path)
            .map_err(|e| file_read_failed(file.path.display().to_string(), e.to_string()))
    }

    /// Replace a document's text atomically: the new text is written to a
    /// temporary file in the same directory and renamed over the original.
    pub fn write(&self, file: &ContentFile, text: &str) -> Result<()> {
        let write_err = |e: &dyn fmt::Display| {
            file_write_failed(file.path.display().to_string(), e.to_string())
        };
        let dir = file.path.parent().unwrap_or(self.root.as_path());
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(&e))?;
        tmp.write_all(text.as_bytes()).map_err(|e| write_err(&e))?;
        tmp.as_file().sync_all().map_err(|e| write_err(&e))?;
        tmp.persist(&file.path).map_err(|e| write_err(&e.error))?;
        debug!(path = %file.path.display(), bytes = text.len(), "wrote document");
        Ok(())
    }
}

fn validate_slug(slug: &str) -> Result<()> {
    let bad = slug.is_empty()
        || slug.starts_with('.')
        || slug.contains(['/', '\\'])
        || slug.contains("..")
        || slug.chars().any(char::is_control);
    if bad {
        return Err(invalid_slug(slug));
    }
    Ok(())
}
