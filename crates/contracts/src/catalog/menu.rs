use serde::{Deserialize, Serialize};

use super::{Catalog, DEFAULT_SUBCATEGORY, DEFAULT_TOP_LEVEL};

/// Values currently selected in the three cascading selectors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuSelection {
    pub top_level: String,
    pub subcategory: String,
    pub leaf: String,
}

/// Option lists shown by the two dependent selectors plus the current
/// selection.
///
/// Repopulating a list selects its first option, the way a `<select>` behaves
/// after its options are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadingMenu {
    subcategory_options: Vec<String>,
    leaf_options: Vec<String>,
    selection: MenuSelection,
}

impl CascadingMenu {
    /// Menu in its initial state: Expense / Food.
    pub fn start(catalog: &Catalog) -> Self {
        let mut menu = Self {
            subcategory_options: Vec::new(),
            leaf_options: Vec::new(),
            selection: MenuSelection::default(),
        };
        menu.select_top_level(catalog, DEFAULT_TOP_LEVEL);
        menu.select_subcategory(catalog, DEFAULT_SUBCATEGORY);
        menu
    }

    /// Repopulates the subcategory list, then the leaf list from the
    /// top-level's default subcategory.
    pub fn select_top_level(&mut self, catalog: &Catalog, top_level: &str) -> &MenuSelection {
        self.subcategory_options = catalog.subcategory_options(top_level);
        self.selection.top_level = top_level.to_string();

        match catalog.default_subcategory(top_level) {
            Some(subcategory) => {
                let subcategory = subcategory.to_string();
                self.select_subcategory(catalog, &subcategory)
            }
            // Unknown label: nothing to cascade into.
            None if self.subcategory_options.is_empty() => {
                self.leaf_options.clear();
                self.selection.subcategory.clear();
                self.selection.leaf.clear();
                &self.selection
            }
            None => {
                let subcategory = first_option(&self.subcategory_options);
                self.select_subcategory(catalog, &subcategory)
            }
        }
    }

    /// Repopulates the leaf list for `subcategory`.
    pub fn select_subcategory(&mut self, catalog: &Catalog, subcategory: &str) -> &MenuSelection {
        self.leaf_options = catalog.leaf_options(subcategory);
        self.selection.subcategory = subcategory.to_string();
        self.selection.leaf = first_option(&self.leaf_options);
        &self.selection
    }

    pub fn select_leaf(&mut self, leaf: &str) -> &MenuSelection {
        self.selection.leaf = leaf.to_string();
        &self.selection
    }

    pub fn subcategory_options(&self) -> &[String] {
        &self.subcategory_options
    }

    pub fn leaf_options(&self) -> &[String] {
        &self.leaf_options
    }

    pub fn selection(&self) -> &MenuSelection {
        &self.selection
    }
}

fn first_option(options: &[String]) -> String {
    options.first().cloned().unwrap_or_default()
}
