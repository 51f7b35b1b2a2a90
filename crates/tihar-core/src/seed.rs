//! # Sample Data
//!
//! The products and orders every session starts with.
//!
//! ## Catalog
//! ```text
//! ┌────┬──────────────────────────┬────────────────┬───────┬───────┐
//! │ id │ name                     │ category       │ price │ stock │
//! ├────┼──────────────────────────┼────────────────┼───────┼───────┤
//! │  1 │ Natural Handmade Soap    │ Personal Care  │    50 │    50 │
//! │  2 │ Hand Sanitizer (500ml)   │ Personal Care  │    80 │   100 │
//! │  3 │ Fresh Dairy Milk (1L)    │ Dairy Products │    60 │    30 │
//! │  4 │ Pure Ghee (500g)         │ Dairy Products │   350 │    20 │
//! │  5 │ Cotton Kurta             │ Textiles       │   450 │    15 │
//! │  6 │ Handwoven Carpet         │ Textiles       │  2500 │     5 │
//! │  7 │ Wooden Office Chair      │ Furniture      │  3500 │     8 │
//! │  8 │ Mango Pickle (500g)      │ Food Products  │   120 │    40 │
//! └────┴──────────────────────────┴────────────────┴───────┴───────┘
//! ```

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{Category, Order, OrderItem, OrderStatus, Product};

/// Rows of the catalog: (name, category, price, unit, image, description, stock).
const PRODUCTS: &[(&str, Category, i64, &str, &str, &str, u32)] = &[
    (
        "Natural Handmade Soap",
        Category::PersonalCare,
        50,
        "Jail No. 2 - Chemical Unit",
        "./oil.jpg",
        "Pure natural soap made with organic ingredients",
        50,
    ),
    (
        "Hand Sanitizer (500ml)",
        Category::PersonalCare,
        80,
        "Jail No. 2 - Chemical Unit",
        "https://images.unsplash.com/photo-1584744982491-665216d95f8b?w=400&h=300&fit=crop",
        "Effective hand sanitizer with 70% alcohol content",
        100,
    ),
    (
        "Fresh Dairy Milk (1L)",
        Category::DairyProducts,
        60,
        "Jail No. 3 - Dairy Unit",
        "https://images.unsplash.com/photo-1563636619-e9143da7973b?w=400&h=300&fit=crop",
        "Fresh pasteurized milk from our dairy farm",
        30,
    ),
    (
        "Pure Ghee (500g)",
        Category::DairyProducts,
        350,
        "Jail No. 3 - Dairy Unit",
        "https://images.unsplash.com/photo-1623428454614-abaf00244e52?w=400&h=300&fit=crop",
        "Traditional pure ghee made from cow milk",
        20,
    ),
    (
        "Cotton Kurta",
        Category::Textiles,
        450,
        "Jail No. 1 - Tailoring Unit",
        "https://images.unsplash.com/photo-1583743814966-8936f5b7be1a?w=400&h=300&fit=crop",
        "Comfortable cotton kurta, hand-stitched by skilled artisans",
        15,
    ),
    (
        "Handwoven Carpet",
        Category::Textiles,
        2500,
        "Jail No. 1 - Weaving Unit",
        "https://images.unsplash.com/photo-1600166898405-da9535204843?w=400&h=300&fit=crop",
        "Beautiful handwoven carpet with traditional designs",
        5,
    ),
    (
        "Wooden Office Chair",
        Category::Furniture,
        3500,
        "Jail No. 2 - Carpentry Unit",
        "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?w=400&h=300&fit=crop",
        "Sturdy wooden chair perfect for office use",
        8,
    ),
    (
        "Mango Pickle (500g)",
        Category::FoodProducts,
        120,
        "Jail No. 4 - Food Processing Unit",
        "https://images.unsplash.com/photo-1626200419199-391ae4be7a41?w=400&h=300&fit=crop",
        "Traditional mango pickle with authentic spices",
        40,
    ),
];

/// The sample catalog. Ids are assigned 1..=8 in table order.
pub fn sample_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .zip(1u32..)
        .map(
            |(&(name, category, price, unit, image, description, stock), id)| Product {
                id,
                name: name.to_string(),
                category,
                price: Money::from_rupees(price),
                unit: unit.to_string(),
                image: image.to_string(),
                description: description.to_string(),
                stock,
            },
        )
        .collect()
}

/// The orders waiting in the admin dashboard at startup.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD001".to_string(),
            customer: "Rajesh Kumar".to_string(),
            items: vec![OrderItem::new("Natural Handmade Soap", 5)],
            total: Money::from_rupees(250),
            status: OrderStatus::Pending,
            date: date(2025, 10, 10),
        },
        Order {
            id: "ORD002".to_string(),
            customer: "Priya Sharma".to_string(),
            items: vec![OrderItem::new("Cotton Kurta", 2)],
            total: Money::from_rupees(900),
            status: OrderStatus::Pending,
            date: date(2025, 10, 11),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ids_are_unique_and_sequential() {
        let ids: Vec<u32> = sample_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_prices_are_positive() {
        assert!(sample_products().iter().all(|p| p.price.is_positive()));
    }

    #[test]
    fn test_seed_orders_are_pending() {
        let orders = sample_orders();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.status == OrderStatus::Pending));
        assert_eq!(orders[0].total, Money::from_rupees(250));
        assert_eq!(orders[1].customer, "Priya Sharma");
    }
}
