//! Frontend configuration module
//!
//! Build-time settings for the client. Values can be overridden by setting
//! the matching environment variable when compiling.

const DEFAULT_APP_TITLE: &str = "Wayfarer";
const DEFAULT_CATEGORIES: &str = "Adventure,Leisure,Cultural";

/// Frontend configuration for branding and the home page categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Title shown in the footer (`WAYFARER_APP_TITLE`)
    pub app_title: String,
    /// Category links on the home page (`WAYFARER_CATEGORIES`, comma separated)
    pub categories: Vec<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            app_title: option_env!("WAYFARER_APP_TITLE")
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(DEFAULT_APP_TITLE)
                .to_string(),
            categories: parse_categories(
                option_env!("WAYFARER_CATEGORIES").unwrap_or(DEFAULT_CATEGORIES),
            ),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }
}

/// Splits a comma-separated category list, dropping blanks and duplicates.
/// Falls back to the default categories when nothing usable remains.
pub fn parse_categories(raw: &str) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !categories.iter().any(|seen| seen.eq_ignore_ascii_case(category)) {
            categories.push(category.to_string());
        }
    }
    if categories.is_empty() && raw != DEFAULT_CATEGORIES {
        return parse_categories(DEFAULT_CATEGORIES);
    }
    categories
}
