use crate::enums::CategoryIcon;
use crate::navigation::links::PRODUCTS_PATH;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Product category shown in the desktop dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: CategoryIcon,
    pub products: &'static [&'static str],
}

impl ProductCategory {
    pub fn slug(&self) -> String {
        slugify(self.title)
    }

    /// Catalog page filtered to this category.
    pub fn href(&self) -> String {
        category_href(self.title)
    }

    /// Tooltip text listing the category's products.
    pub fn product_summary(&self) -> String {
        format!("Includes: {}", self.products.join(", "))
    }
}

pub const PRODUCT_CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        title: "Industrial Labels",
        description: "Heavy-duty labels for industrial applications",
        icon: CategoryIcon::Factory,
        products: &[
            "Polycarbonate Labels (PC Stickers)",
            "High Temperature Labels",
            "ESD Labels",
            "Automotive Labels",
        ],
    },
    ProductCategory {
        title: "Commercial Labels",
        description: "Versatile labels for business and commercial use",
        icon: CategoryIcon::Package,
        products: &[
            "Self Adhesive Labels",
            "Bar code Labels",
            "Roll Form Labels",
            "Key Pad Labels",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("category #{index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("categories \"{first}\" and \"{second}\" share the slug \"{slug}\"")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

/// Lowercases `title` and replaces every run of whitespace with one hyphen.
///
/// Example: "Industrial  Labels" -> "industrial-labels"
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// `/products?category=<slug>`; the slug is percent-encoded.
pub fn category_href(title: &str) -> String {
    format!(
        "{}?category={}",
        PRODUCTS_PATH,
        urlencoding::encode(&slugify(title))
    )
}

/// Rejects empty titles and titles that collapse onto the same slug.
pub fn validate_catalog(categories: &[ProductCategory]) -> Result<(), CatalogError> {
    let mut seen: HashMap<String, &'static str> = HashMap::new();
    for (index, category) in categories.iter().enumerate() {
        if category.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { index });
        }
        let slug = category.slug();
        if let Some(first) = seen.get(&slug) {
            return Err(CatalogError::DuplicateSlug {
                slug,
                first: first.to_string(),
                second: category.title.to_string(),
            });
        }
        seen.insert(slug, category.title);
    }
    Ok(())
}
