//! Insertion-ordered product catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::pricing::{listing_line, render_listing};
use crate::types::Price;

/// A store's products keyed by name.
///
/// Names are unique. Entries keep the position of their first insertion;
/// re-adding a name replaces its price in place and removal shifts the
/// later entries up.
///
/// Equality compares contents only, not order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: IndexMap<String, Price>,
}

impl ProductCatalog {
    /// Listing text for a catalog with no products.
    pub const EMPTY_LISTING: &'static str = "No products available in the store.";

    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`, returning the replaced price if any.
    pub fn insert(&mut self, name: &str, price: Price) -> Option<Price> {
        self.products.insert(name.to_owned(), price)
    }

    /// Remove `name`, returning its price if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Price> {
        self.products.shift_remove(name)
    }

    /// Look up the price of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Price> {
        self.products.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate `(name, price)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Price)> {
        self.products.iter().map(|(name, price)| (name.as_str(), *price))
    }

    /// One `Product: {name} | Price: ${price}` line per entry, or
    /// [`Self::EMPTY_LISTING`].
    #[must_use]
    pub fn listing(&self) -> String {
        render_listing(
            self.iter().map(|(name, price)| listing_line(name, price)),
            Self::EMPTY_LISTING,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names(catalog: &ProductCatalog) -> Vec<&str> {
        catalog.iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut catalog = ProductCatalog::new();
        catalog.insert("Hoodie", Price::from_whole(60));
        catalog.insert("Jeans", Price::from_whole(40));
        catalog.insert("Cap", Price::from_whole(15));
        assert_eq!(names(&catalog), ["Hoodie", "Jeans", "Cap"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut catalog = ProductCatalog::new();
        catalog.insert("Hoodie", Price::from_whole(60));
        catalog.insert("Jeans", Price::from_whole(40));
        let old = catalog.insert("Hoodie", Price::from_whole(55));

        assert_eq!(old, Some(Price::from_whole(60)));
        assert_eq!(catalog.len(), 2);
        assert_eq!(names(&catalog), ["Hoodie", "Jeans"]);
        assert_eq!(catalog.get("Hoodie"), Some(Price::from_whole(55)));
    }

    #[test]
    fn test_remove() {
        let mut catalog = ProductCatalog::new();
        catalog.insert("Hoodie", Price::from_whole(60));
        catalog.insert("Jeans", Price::from_whole(40));

        assert_eq!(catalog.remove("Socks"), None);
        assert_eq!(catalog.len(), 2);

        assert_eq!(catalog.remove("Hoodie"), Some(Price::from_whole(60)));
        assert!(!catalog.contains("Hoodie"));
        assert_eq!(names(&catalog), ["Jeans"]);
    }

    #[test]
    fn test_remove_keeps_later_entries_in_order() {
        let mut catalog = ProductCatalog::new();
        for name in ["Hoodie", "Jeans", "Cap", "Socks"] {
            catalog.insert(name, Price::from_whole(10));
        }

        catalog.remove("Jeans");
        assert_eq!(names(&catalog), ["Hoodie", "Cap", "Socks"]);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut catalog = ProductCatalog::new();
        assert_eq!(catalog.remove("Hoodie"), None);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_listing() {
        let mut catalog = ProductCatalog::new();
        assert_eq!(catalog.listing(), ProductCatalog::EMPTY_LISTING);

        catalog.insert("Hoodie", Price::from_whole(60));
        catalog.insert("Jeans", Price::from_whole(40));
        assert_eq!(
            catalog.listing(),
            "Product: Hoodie | Price: $60\nProduct: Jeans | Price: $40"
        );
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut catalog = ProductCatalog::new();
        catalog.insert("Jeans", Price::from_whole(40));
        catalog.insert("Hoodie", Price::from_whole(60));

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"Jeans":"40","Hoodie":"60"}"#);

        let parsed: ProductCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(names(&parsed), ["Jeans", "Hoodie"]);
    }
}
