use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::patterns::Category;

pub const DEFAULT_MAX_INPUT_LEN: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Inputs longer than this many bytes are rejected before screening.
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
    /// Allow-list of categories to scan; `None` scans all of them.
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub exclude: Vec<Category>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_input_len: default_max_input_len(),
            categories: None,
            exclude: Vec::new(),
        }
    }
}

fn default_max_input_len() -> usize {
    DEFAULT_MAX_INPUT_LEN
}

impl ExtractorConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ExtractError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn enabled(&self, category: Category) -> bool {
        let allowed = self
            .categories
            .as_ref()
            .map_or(true, |list| list.contains(&category));
        allowed && !self.exclude.contains(&category)
    }

    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::ALL.into_iter().filter(|c| self.enabled(*c)).collect()
    }
}

/// Parse a comma-separated category list such as `"email, credit_card"`.
pub fn parse_category_list(list: &str) -> Result<Vec<Category>, ExtractError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
