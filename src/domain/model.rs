use serde::{Deserialize, Serialize};

/// One project as returned by the Eclipse projects API. Only the fields the
/// landscape needs are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectRecord {
    pub category: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub url: Option<String>,
    pub state: Option<String>,
    // The API emits null as well as a missing key here; both mean "none".
    #[serde(default)]
    pub github_repos: Option<Vec<GithubRepo>>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubRepo {
    pub url: Option<String>,
}

/// One entry in the generated landscape. Optional fields are omitted from the
/// YAML entirely when absent; `logo` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub subcategories: Vec<Subcategory>,
}

/// The full document written to data.yml. The Vecs preserve first-seen order,
/// which serde_yaml carries through to the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landscape {
    pub categories: Vec<Category>,
}
