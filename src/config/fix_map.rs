//! Title/excerpt fix mapping read by `apply`
//!
//! The file is a top-level YAML mapping from slug to either a title string
//! or a mapping with `title` and/or `excerpt`:
//!
//! ```yaml
//! banana-bread: "Moist Banana Bread with Brown Butter and Toasted Walnuts"
//! lemon-cake:
//!   title: "Lemon Drizzle Cake with a Crackly Sugar Glaze Topping"
//!   excerpt: "..."
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, config_invalid, config_not_found, config_parse_failed};

/// Fields to overwrite for one slug.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldFix {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFix {
    Title(String),
    Fields(FieldFix),
}

impl From<RawFix> for FieldFix {
    fn from(raw: RawFix) -> Self {
        match raw {
            RawFix::Title(title) => FieldFix {
                title: Some(title),
                excerpt: None,
            },
            RawFix::Fields(fields) => fields,
        }
    }
}

/// Ordered slug to [`FieldFix`] mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixMap {
    entries: Vec<(String, FieldFix)>,
}

impl FixMap {
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(config_not_found(display));
        }
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config_parse_failed(display.clone(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|err| match err {
            crate::error::FrontmatterError::ConfigParseFailed { reason, .. } => {
                config_parse_failed(display, reason)
            }
            other => other,
        })
    }

    /// Parse a mapping, keeping the file's slug order.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let parse_err = |e: serde_yaml::Error| config_parse_failed("<fix map>", e.to_string());

        let raw: serde_yaml::Mapping = serde_yaml::from_str(yaml).map_err(parse_err)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let slug = match key {
                serde_yaml::Value::String(s) => s,
                other => {
                    return Err(config_invalid(format!(
                        "fix map keys must be slugs, found {other:?}"
                    )));
                }
            };
            let fix: FieldFix = serde_yaml::from_value::<RawFix>(value)
                .map_err(parse_err)?
                .into();
            entries.push((slug, fix));
        }

        let map = FixMap { entries };
        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> Result<()> {
        for (slug, fix) in &self.entries {
            if fix.title.is_none() && fix.excerpt.is_none() {
                return Err(config_invalid(format!(
                    "entry '{slug}' sets neither title nor excerpt"
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldFix)> {
        self.entries.iter().map(|(slug, fix)| (slug.as_str(), fix))
    }
}
