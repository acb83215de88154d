use crate::domain::model::{Category, Item, Landscape, ProjectRecord, Subcategory};
use std::collections::HashMap;

const DEFAULT_CATEGORY: &str = "Unknown";
const DEFAULT_SUBCATEGORY: &str = "Misc";

/// Accumulates items into the category/subcategory grouping, preserving
/// first-seen order of categories and subcategories and append order of items.
pub struct LandscapeBuilder {
    categories: Vec<Category>,
    // category name -> position in `categories`
    index: HashMap<String, usize>,
}

impl LandscapeBuilder {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Maps one project record to an item and appends it under its
    /// (category, subcategory) pair. `logo` must already be resolved; every
    /// record yields exactly one item.
    pub fn push(&mut self, record: ProjectRecord, logo: String) {
        let (cat_name, subcat_name) = split_category(record.category.as_deref());

        let cat_pos = match self.index.get(&cat_name) {
            Some(&pos) => pos,
            None => {
                self.index.insert(cat_name.clone(), self.categories.len());
                self.categories.push(Category {
                    name: cat_name,
                    subcategories: Vec::new(),
                });
                self.categories.len() - 1
            }
        };

        let subcats = &mut self.categories[cat_pos].subcategories;
        let subcat_pos = match subcats.iter().position(|s| s.name == subcat_name) {
            Some(pos) => pos,
            None => {
                subcats.push(Subcategory {
                    name: subcat_name,
                    items: Vec::new(),
                });
                subcats.len() - 1
            }
        };

        subcats[subcat_pos].items.push(build_item(record, logo));
    }

    pub fn finish(self) -> Landscape {
        Landscape {
            categories: self.categories,
        }
    }
}

impl Default for LandscapeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a free-text category string on the first `/` only, so any further
/// slashes stay inside the subcategory name. Missing category falls back to
/// "Unknown", missing subcategory to "Misc". Never fails.
fn split_category(category: Option<&str>) -> (String, String) {
    let raw = category.unwrap_or(DEFAULT_CATEGORY);
    let mut parts = raw.splitn(2, '/').map(str::trim);
    let cat = parts.next().unwrap_or(DEFAULT_CATEGORY).to_string();
    match parts.next() {
        Some(sub) => (cat, sub.to_string()),
        None => (cat, DEFAULT_SUBCATEGORY.to_string()),
    }
}

fn build_item(record: ProjectRecord, logo: String) -> Item {
    // Empty state means no project maturity to report.
    let project = record.state.filter(|s| !s.is_empty());

    let repo_url = record
        .github_repos
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|repo| repo.url)
        .filter(|url| !url.is_empty());

    Item {
        name: record.name,
        description: record.summary,
        homepage_url: record.url,
        project,
        repo_url,
        logo,
    }
}
