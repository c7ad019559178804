//! Category catalog: top-level categories, their subcategories and the leaf
//! options nested under each subcategory.

mod data;
pub mod menu;

use once_cell::sync::Lazy;

pub use data::{DEFAULT_SUBCATEGORY, DEFAULT_TOP_LEVEL};
pub use menu::{CascadingMenu, MenuSelection};

/// Catalog built from the compiled-in tables, shared by every page.
pub static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Option list shown when nothing is selected upstream.
pub fn placeholder() -> Vec<String> {
    vec![String::new()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelEntry {
    pub label: String,
    /// Subcategory selected when this top-level category is picked
    pub default_subcategory: String,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryEntry {
    pub label: String,
    pub leaves: Vec<String>,
}

/// Two ordered lookup tables. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    top_levels: Vec<TopLevelEntry>,
    subcategories: Vec<SubcategoryEntry>,
}

impl Catalog {
    pub fn new(top_levels: Vec<TopLevelEntry>, subcategories: Vec<SubcategoryEntry>) -> Self {
        Self {
            top_levels,
            subcategories,
        }
    }

    pub fn builtin() -> Self {
        let top_levels = data::TOP_LEVELS
            .iter()
            .map(|(label, default_subcategory, subcategories)| TopLevelEntry {
                label: label.to_string(),
                default_subcategory: default_subcategory.to_string(),
                subcategories: to_owned_list(subcategories),
            })
            .collect();

        let subcategories = data::SUBCATEGORIES
            .iter()
            .map(|(label, leaves)| SubcategoryEntry {
                label: label.to_string(),
                leaves: to_owned_list(leaves),
            })
            .collect();

        Self::new(top_levels, subcategories)
    }

    /// Top-level labels in display order
    pub fn top_levels(&self) -> Vec<String> {
        self.top_levels.iter().map(|e| e.label.clone()).collect()
    }

    /// Options for the subcategory selector.
    ///
    /// Empty input gives the placeholder, an unknown label gives no options.
    pub fn subcategory_options(&self, top_level: &str) -> Vec<String> {
        if top_level.is_empty() {
            return placeholder();
        }
        self.find_top_level(top_level)
            .map(|e| e.subcategories.clone())
            .unwrap_or_default()
    }

    /// Options for the leaf selector, same contract as [`Self::subcategory_options`].
    pub fn leaf_options(&self, subcategory: &str) -> Vec<String> {
        if subcategory.is_empty() {
            return placeholder();
        }
        self.find_subcategory(subcategory)
            .map(|e| e.leaves.clone())
            .unwrap_or_default()
    }

    pub fn default_subcategory(&self, top_level: &str) -> Option<&str> {
        self.find_top_level(top_level)
            .map(|e| e.default_subcategory.as_str())
    }

    /// Labels defined more than once in either table. Only the last
    /// definition of such a label is reachable through lookups.
    pub fn shadowed_keys(&self) -> Vec<&str> {
        let mut shadowed = duplicates(self.top_levels.iter().map(|e| e.label.as_str()));
        for label in duplicates(self.subcategories.iter().map(|e| e.label.as_str())) {
            if !shadowed.contains(&label) {
                shadowed.push(label);
            }
        }
        shadowed
    }

    fn find_top_level(&self, label: &str) -> Option<&TopLevelEntry> {
        self.top_levels.iter().rev().find(|e| e.label == label)
    }

    fn find_subcategory(&self, label: &str) -> Option<&SubcategoryEntry> {
        self.subcategories.iter().rev().find(|e| e.label == label)
    }
}

fn duplicates<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    let mut repeated = Vec::new();
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        } else if !repeated.contains(&label) {
            repeated.push(label);
        }
    }
    repeated
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
