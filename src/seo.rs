//! Structured data for search engines.

use serde::{Deserialize, Serialize};

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Display name.
    pub name: String,
    /// Absolute URL of the step.
    pub item: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item: item.into(),
        }
    }
}

#[derive(Serialize)]
struct BreadcrumbList<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<ListItem<'a>>,
}

#[derive(Serialize)]
struct ListItem<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    name: &'a str,
    item: &'a str,
}

/// Render a schema.org `BreadcrumbList` as compact JSON-LD.
///
/// Positions are 1-based in trail order.
pub fn breadcrumb_schema(items: &[BreadcrumbItem]) -> String {
    let list = BreadcrumbList {
        context: "https://schema.org",
        kind: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(i, it)| ListItem {
                kind: "ListItem",
                position: i + 1,
                name: &it.name,
                item: &it.item,
            })
            .collect(),
    };
    serde_json::to_string(&list).expect("breadcrumb list must serialize")
}
