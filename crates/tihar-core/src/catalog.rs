//! # Catalog
//!
//! The fixed product list and the product page's search/filter.
//!
//! ## Filter Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ Search products... ]   [All] [Personal Care] [Dairy Products] ...    │
//! │                                                                         │
//! │  A product is shown when BOTH hold:                                     │
//! │    • category button is "All" or equals the product's category          │
//! │    • query (case-insensitive) is in the name OR the description         │
//! │                                                                         │
//! │  Empty query matches everything. Catalog order is preserved.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Category, Product};
use crate::FEATURED_PRODUCTS;

/// Category selector of the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Search criteria for [`Catalog::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl ProductFilter {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        ProductFilter {
            category,
            query: query.into(),
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.category) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
    }
}

/// The immutable product list of a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The products shown on the home page.
    pub fn featured(&self) -> &[Product] {
        &self.products[..self.products.len().min(FEATURED_PRODUCTS)]
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// Products passing `filter`, in catalog order.
    ///
    /// ```rust
    /// use tihar_core::{sample_products, Catalog, CategoryFilter, ProductFilter};
    ///
    /// let catalog = Catalog::new(sample_products());
    /// let hits = catalog.search(&ProductFilter::new(CategoryFilter::All, "GHEE"));
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].id, 4);
    /// ```
    pub fn search(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_products;

    fn catalog() -> Catalog {
        Catalog::new(sample_products())
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let catalog = catalog();
        let hits = catalog.search(&ProductFilter::default());
        assert_eq!(hits.len(), catalog.len());
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let filter = ProductFilter::new(CategoryFilter::Only(Category::DairyProducts), "");
        assert_eq!(ids(&catalog.search(&filter)), vec![3, 4]);
    }

    #[test]
    fn test_query_matches_description_case_insensitively() {
        let catalog = catalog();
        // "alcohol" only appears in the sanitizer's description
        let filter = ProductFilter::new(CategoryFilter::All, "ALCOHOL");
        assert_eq!(ids(&catalog.search(&filter)), vec![2]);
    }

    #[test]
    fn test_category_and_query_combine() {
        let catalog = catalog();
        let filter = ProductFilter::new(CategoryFilter::Only(Category::Textiles), "carpet");
        assert_eq!(ids(&catalog.search(&filter)), vec![6]);

        let filter = ProductFilter::new(CategoryFilter::Only(Category::Furniture), "carpet");
        assert!(catalog.search(&filter).is_empty());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(
            catalog().categories(),
            vec![
                Category::PersonalCare,
                Category::DairyProducts,
                Category::Textiles,
                Category::Furniture,
                Category::FoodProducts,
            ]
        );
    }

    #[test]
    fn test_featured_is_first_four() {
        let catalog = catalog();
        let featured: Vec<u32> = catalog.featured().iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![1, 2, 3, 4]);

        let small = Catalog::new(sample_products().into_iter().take(2).collect());
        assert_eq!(small.featured().len(), 2);
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "textiles".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Textiles)
        );
        assert!("toys".parse::<CategoryFilter>().is_err());
    }
}
