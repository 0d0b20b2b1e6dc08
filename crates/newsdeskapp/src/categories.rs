//! # Category Registry
//!
//! The site's topical classification is fixed at compile time. It drives
//! navigation, category pages, and (when enabled) write-time validation of an
//! article's `category` / `subCategory`.
//!
//! Page slugs are matched loosely: `stock-market`, `Stock Market` and
//! `STOCK-MARKET` all resolve to the "Stock Market" subcategory.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubCategory {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: &'static str,
    pub path: &'static str,
    #[serde(skip_serializing_if = "has_no_subcategories")]
    pub sub_categories: &'static [SubCategory],
}

fn has_no_subcategories(subs: &&'static [SubCategory]) -> bool {
    subs.is_empty()
}

const fn top(name: &'static str, path: &'static str) -> Category {
    Category {
        name,
        path,
        sub_categories: &[],
    }
}

const fn sub(name: &'static str, path: &'static str) -> SubCategory {
    SubCategory { name, path }
}

static CATEGORIES: &[Category] = &[
    top("Home", "/"),
    top("Politics", "/category/politics"),
    Category {
        name: "Business",
        path: "/category/business",
        sub_categories: &[
            sub("Entrepreneurship", "/category/entrepreneurship"),
            sub("Stock Market", "/category/stock-market"),
        ],
    },
    Category {
        name: "Education",
        path: "/category/education",
        sub_categories: &[
            sub("Science", "/category/science"),
            sub("Technology", "/category/technology"),
        ],
    },
    Category {
        name: "Entertainment",
        path: "/category/entertainment",
        sub_categories: &[
            sub("Lifestyle", "/category/lifestyle"),
            sub("Trending", "/category/trending"),
        ],
    },
    Category {
        name: "Rights",
        path: "/category/rights",
        sub_categories: &[
            sub("Human Rights", "/category/human-rights"),
            sub("Animal Rights", "/category/animal-rights"),
            sub("Law", "/category/law"),
        ],
    },
    top("Environment", "/category/environment"),
    top("World", "/category/world"),
    top("Sports", "/category/sports"),
    top("Aperture Alchemist", "/category/aperture-alchemist"),
];

/// Result of resolving a page slug against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryMatch {
    TopLevel(&'static Category),
    Sub {
        parent: &'static Category,
        sub: &'static SubCategory,
    },
}

impl CategoryMatch {
    pub fn name(&self) -> &'static str {
        match self {
            CategoryMatch::TopLevel(c) => c.name,
            CategoryMatch::Sub { sub, .. } => sub.name,
        }
    }

    pub fn is_sub(&self) -> bool {
        matches!(self, CategoryMatch::Sub { .. })
    }
}

/// Top-level categories in navigation order.
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.name).collect()
}

/// Every subcategory name, flattened in registry order.
pub fn subcategory_names() -> Vec<&'static str> {
    CATEGORIES
        .iter()
        .flat_map(|c| c.sub_categories.iter().map(|s| s.name))
        .collect()
}

pub fn is_known_category(name: &str) -> bool {
    let name = name.trim();
    CATEGORIES.iter().any(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn is_known_subcategory(name: &str) -> bool {
    let name = name.trim();
    subcategory_names()
        .iter()
        .any(|s| s.eq_ignore_ascii_case(name))
}

/// Resolves a page slug to a category or subcategory.
///
/// Top-level categories win over subcategories of the same name.
pub fn resolve(slug: &str) -> Option<CategoryMatch> {
    let wanted = normalize_slug(slug);
    if wanted.is_empty() {
        return None;
    }

    if let Some(category) = CATEGORIES
        .iter()
        .find(|c| c.name.to_lowercase() == wanted)
    {
        return Some(CategoryMatch::TopLevel(category));
    }

    CATEGORIES.iter().find_map(|parent| {
        parent
            .sub_categories
            .iter()
            .find(|s| s.name.to_lowercase() == wanted)
            .map(|sub| CategoryMatch::Sub { parent, sub })
    })
}

fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase().replace('-', " ")
}
