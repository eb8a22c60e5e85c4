//! Common test utilities for frontmatter-seo integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A fully compliant recipe: no issues, no warnings.
pub const PERFECT_RECIPE: &str = "---
title: \"Classic Buttermilk Pancakes: Fluffy, Golden and Easy\"
excerpt: \"Light and fluffy buttermilk pancakes with crisp edges, ready in twenty minutes using pantry staples. Includes tips for resting the batter and for freezing.\"
slug: \"buttermilk-pancakes\"
category: \"breakfast\"
publishedAt: \"2024-03-01T10:00:00.000Z\"
updatedAt: \"2024-03-02\"
tags:
  - \"breakfast\"
  - \"pancakes\"
heroImage:
  src: \"/images/pancakes.jpg\"
  alt: \"A stack of pancakes\"
author: \"Sam Baker\"
---

# Classic Buttermilk Pancakes

Whisk, rest, cook.
";

/// Same as [`PERFECT_RECIPE`] but without an excerpt.
pub const RECIPE_WITHOUT_EXCERPT: &str = "---
title: \"Slow Roasted Tomato Soup with Basil and Crunchy Croutons\"
slug: \"tomato-soup\"
category: \"soups\"
publishedAt: \"2024-01-10\"
updatedAt: \"2024-01-12\"
tags:
  - \"soup\"
heroImage:
  src: \"/images/soup.jpg\"
  alt: \"Tomato soup\"
author: \"Sam Baker\"
---

# Tomato Soup
";

/// A recipe whose header repeats `title`, each with its own continuation lines.
pub const CORRUPTED_RECIPE: &str = "---
title: >-
  Lemon Drizzle Cake
  with Sugar Glaze
slug: lemon-cake
title: >-
  A later title that
  must be discarded
category: cakes
---

# Lemon Drizzle Cake
";

/// A temporary content root for integration tests
pub struct TestContent {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the content root
    pub path: PathBuf,
}

impl TestContent {
    /// Create an empty content root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("content");
        std::fs::create_dir_all(&path).expect("Failed to create content root");
        Self { temp, path }
    }

    /// Write a document, e.g. `write_doc("recipes/cake.mdx", text)`
    pub fn write_doc(&self, rel: &str, text: &str) {
        let file_path = self.path.join(rel);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, text).expect("Failed to write document");
    }

    pub fn read_doc(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path.join(rel)).expect("Failed to read document")
    }

    /// Write a file next to the content root, not inside it.
    pub fn write_sibling(&self, name: &str, text: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, text).expect("Failed to write file");
        path
    }

    pub fn content_root(&self) -> frontmatter_seo::content::ContentRoot {
        frontmatter_seo::content::ContentRoot::new(&self.path)
    }
}
