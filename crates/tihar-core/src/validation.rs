//! # Validation Module
//!
//! Input validation for values typed by a user before they reach a store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input text (shell line / form field)                         │
//! │  └── THIS MODULE: parse + business rules                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Stores (Cart, OrderBook)                                     │
//! │  └── Never fail; unknown ids are no-ops                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates an order id such as `ORD001`.
///
/// ## Rules
/// - Must not be empty
/// - Letters and digits only
///
/// ## Returns
/// The trimmed id, upper-cased.
///
/// ```rust
/// use tihar_core::validation::validate_order_id;
///
/// assert_eq!(validate_order_id(" ord001 ").unwrap(), "ORD001");
/// assert!(validate_order_id("").is_err());
/// assert!(validate_order_id("ORD 1").is_err());
/// ```
pub fn validate_order_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "order id".to_string(),
        });
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "order id".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(id.to_ascii_uppercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a product id. Catalog ids start at 1.
pub fn validate_product_id(input: &str) -> ValidationResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }
    let id: u32 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "product id".to_string(),
        reason: "must be a positive whole number".to_string(),
    })?;

    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "product id".to_string(),
        });
    }

    Ok(id)
}

/// Parses a quantity typed into the cart's quantity control.
///
/// ## Rules
/// - Zero and negative values are accepted: the cart treats them as a
///   removal
/// - At most [`MAX_ITEM_QUANTITY`] (999)
///
/// ```rust
/// use tihar_core::validation::validate_quantity_input;
///
/// assert_eq!(validate_quantity_input("12").unwrap(), 12);
/// assert!(validate_quantity_input("1000").is_err());
/// ```
pub fn validate_quantity_input(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }
    let quantity: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(quantity)
}

/// Validates a donation amount typed as text.
///
/// ## Rules
/// - Required
/// - Whole rupees only
/// - At least `minimum`
pub fn validate_donation_amount(input: &str, minimum: Money) -> ValidationResult<Money> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "amount".to_string(),
        });
    }

    let rupees: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: "must be a whole number of rupees".to_string(),
    })?;

    let amount = Money::from_rupees(rupees);
    if amount < minimum {
        return Err(ValidationError::BelowMinimum {
            field: "amount".to_string(),
            min: minimum.rupees(),
        });
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  soap ").unwrap(), "soap");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_order_id() {
        assert_eq!(validate_order_id("ORD002").unwrap(), "ORD002");
        assert!(validate_order_id("   ").is_err());
        assert!(validate_order_id("ORD-1").is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id("7").unwrap(), 7);
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("-1").is_err());
        assert_eq!(
            validate_product_id("0"),
            Err(ValidationError::MustBePositive {
                field: "product id".to_string()
            })
        );
        assert!(validate_product_id("seven").is_err());
    }

    #[test]
    fn test_validate_quantity_input() {
        assert_eq!(validate_quantity_input("3").unwrap(), 3);
        assert_eq!(validate_quantity_input("0").unwrap(), 0);
        assert_eq!(validate_quantity_input("-2").unwrap(), -2);
        assert!(validate_quantity_input("two").is_err());
    }

    #[test]
    fn test_validate_quantity_input_upper_bound() {
        assert_eq!(validate_quantity_input("999").unwrap(), 999);
        assert_eq!(
            validate_quantity_input("1000"),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: 999
            })
        );
        assert!(validate_quantity_input("9223372036854775807").is_err());
        // past i64 entirely
        assert!(matches!(
            validate_quantity_input("99999999999999999999"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_donation_amount() {
        let min = Money::from_rupees(100);
        assert_eq!(validate_donation_amount("100", min).unwrap().rupees(), 100);
        assert_eq!(validate_donation_amount(" 5000 ", min).unwrap().rupees(), 5000);

        assert_eq!(
            validate_donation_amount("", min),
            Err(ValidationError::Required {
                field: "amount".to_string()
            })
        );
        assert_eq!(
            validate_donation_amount("99", min),
            Err(ValidationError::BelowMinimum {
                field: "amount".to_string(),
                min: 100
            })
        );
        assert!(matches!(
            validate_donation_amount("1e3", min),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
