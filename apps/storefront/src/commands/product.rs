//! # Product Commands
//!
//! Catalog listing for the home and products pages.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "ghee", clicks [Dairy Products]                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products(Some("dairy"), Some("ghee"))                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Parse category ("all" or a category)  │──► bad? VALIDATION_ERROR │
//! │  │  2. Trim + length-check the query         │                         │
//! │  │  3. Catalog::search (catalog order)       │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<ProductDto>                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tihar_core::validation::validate_search_query;
use tihar_core::{Category, CategoryFilter, CoreError, Money, Product, ProductFilter};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Product as the product cards show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub price: Money,
    /// Formatted price, e.g. "₹450".
    pub price_label: String,
    pub unit: String,
    pub image: String,
    pub description: String,
    pub stock: u32,
    pub in_stock: bool,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name.clone(),
            category: p.category,
            price: p.price,
            price_label: p.price.to_string(),
            unit: p.unit.clone(),
            image: p.image.clone(),
            description: p.description.clone(),
            stock: p.stock,
            in_stock: p.in_stock(1),
        }
    }
}

/// Lists products matching the category selector and search box.
///
/// ## Arguments
/// * `category` - `"all"`, a category name or slug (default: all)
/// * `query` - Case-insensitive match on name or description (default: empty)
pub fn list_products(
    state: &AppState,
    category: Option<&str>,
    query: Option<&str>,
) -> Result<Vec<ProductDto>, ApiError> {
    let category: CategoryFilter = match category {
        Some(c) => c.parse()?,
        None => CategoryFilter::All,
    };
    let query = validate_search_query(query.unwrap_or_default())?;

    debug!(?category, query = %query, "list_products command");

    let filter = ProductFilter::new(category, query);
    Ok(state
        .catalog
        .search(&filter)
        .into_iter()
        .map(ProductDto::from)
        .collect())
}

/// Gets a single product by id.
pub fn get_product(state: &AppState, id: u32) -> Result<ProductDto, ApiError> {
    debug!(id, "get_product command");
    state
        .catalog
        .get(id)
        .map(ProductDto::from)
        .ok_or_else(|| CoreError::ProductNotFound(id).into())
}

/// The home page's featured row.
pub fn featured_products(state: &AppState) -> Vec<ProductDto> {
    debug!("featured_products command");
    state
        .catalog
        .featured()
        .iter()
        .map(ProductDto::from)
        .collect()
}

/// Category buttons of the products page, without the leading "All".
pub fn list_categories(state: &AppState) -> Vec<Category> {
    state.catalog.categories()
}
