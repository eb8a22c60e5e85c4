//! Configuration for frontmatter-seo
//!
//! - [`Settings`]: content root and admin server options
//! - [`FixMap`]: `slug -> title/excerpt` mapping applied by `apply`

pub mod fix_map;
pub mod settings;

pub use fix_map::{FieldFix, FixMap};
pub use settings::{DEFAULT_ADDR, DEFAULT_CONTENT_ROOT, ServerSettings, Settings};
