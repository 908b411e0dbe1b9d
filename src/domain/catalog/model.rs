//! Catalog product entity and category helpers

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product as delivered by the backend.
///
/// `enabled` and `banner` are authoritative fields; when the backend omits
/// them they default to an enabled, non-banner product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Price in minor currency units
    #[serde(default)]
    pub price: u64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub banner: bool,
}

fn default_enabled() -> bool {
    true
}

impl Product {
    /// Shown in the public catalog
    pub fn is_visible(&self) -> bool {
        self.enabled
    }

    /// Shown in the home-page banner
    pub fn is_featured(&self) -> bool {
        self.enabled && self.banner
    }
}

/// Products visible in the public catalog, in their original order.
pub fn visible_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.is_visible()).cloned().collect()
}

/// Enabled products flagged for the banner, in their original order.
pub fn banner_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.is_featured()).cloned().collect()
}

/// Trim, drop blanks, dedupe, and sort category names.
///
/// Ordering is case-insensitive; names differing only in case are kept
/// apart and ordered by their raw value.
pub fn normalize_categories<'a, I>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = categories
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    let mut sorted: Vec<String> = unique.into_iter().map(str::to_owned).collect();
    sorted.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    sorted
}

/// Distinct categories of the visible products.
pub fn catalog_categories(products: &[Product]) -> Vec<String> {
    normalize_categories(
        products
            .iter()
            .filter(|p| p.is_visible())
            .filter_map(|p| p.category.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: Option<&str>, enabled: bool, banner: bool) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {}", id),
            category: category.map(Into::into),
            price: 1000,
            enabled,
            banner,
        }
    }

    #[test]
    fn missing_flags_default_to_enabled_without_banner() {
        let p: Product = serde_json::from_str(r#"{"id": "1", "name": "Mug"}"#).unwrap();
        assert!(p.enabled);
        assert!(!p.banner);
        assert_eq!(p.category, None);
        assert_eq!(p.price, 0);
    }

    #[test]
    fn explicit_flags_are_kept() {
        let p: Product = serde_json::from_str(
            r#"{"id": "1", "name": "Mug", "enabled": false, "banner": true}"#,
        )
        .unwrap();
        assert!(!p.enabled);
        assert!(p.banner);
        assert!(!p.is_featured());
    }

    #[test]
    fn visible_products_skip_disabled() {
        let products = vec![
            product("1", None, true, false),
            product("2", None, false, false),
            product("3", None, true, true),
        ];
        let ids: Vec<_> = visible_products(&products)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn banner_requires_enabled() {
        let products = vec![
            product("1", None, true, true),
            product("2", None, false, true),
            product("3", None, true, false),
        ];
        let ids: Vec<_> = banner_products(&products)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn categories_are_trimmed_deduped_and_sorted() {
        let result = normalize_categories([" Shoes", "bags", "Shoes ", "", "  ", "Accessories"]);
        assert_eq!(result, vec!["Accessories", "bags", "Shoes"]);
    }

    #[test]
    fn case_variants_sort_together() {
        let result = normalize_categories(["shoes", "Bags", "Shoes", "bags"]);
        assert_eq!(result, vec!["Bags", "bags", "Shoes", "shoes"]);
    }

    #[test]
    fn catalog_categories_ignore_disabled_and_missing() {
        let products = vec![
            product("1", Some("Shoes"), true, false),
            product("2", Some("Hats"), false, false),
            product("3", None, true, false),
            product("4", Some("Bags"), true, false),
            product("5", Some("Shoes"), true, false),
        ];
        assert_eq!(catalog_categories(&products), vec!["Bags", "Shoes"]);
    }
}
