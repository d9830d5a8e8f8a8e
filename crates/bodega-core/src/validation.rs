//! # Validation Module
//!
//! Input precondition checks for Bodega.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Catalog load                                              │
//! │  ├── product ids are non-blank                                      │
//! │  ├── unit prices are non-negative                                   │
//! │  └── perishables have a positive shelf life                         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Shop configuration                                        │
//! │  ├── discount rate stays within [0, 1]                              │
//! │  └── markup rates are non-negative                                  │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Stock & basket operations                                 │
//! │  └── quantities are strictly positive                               │
//! │                                                                     │
//! │  Checked up front so business logic never sees a bad argument       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bodega_core::validation::{validate_quantity, validate_product_id};
//!
//! validate_product_id("BEANS").unwrap();
//! validate_quantity(5).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_id(product_id: &str) -> ValidationResult<()> {
    if product_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a batch or removal quantity.
///
/// ## Rules
/// - Must be strictly positive; zero-unit batches never enter the system
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a product's base unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_unit_price(unit_price: Decimal) -> ValidationResult<()> {
    if unit_price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

/// Validates a perishable product's shelf life.
///
/// ## Rules
/// - Must be strictly positive; a perishable that expires on arrival is a
///   catalog mistake
pub fn validate_expiration_days(days: u32) -> ValidationResult<()> {
    if days == 0 {
        return Err(ValidationError::MustBePositive {
            field: "expiration days".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Rate Validators
// =============================================================================

/// Validates the near-expiry discount rate.
///
/// ## Rules
/// - Must be within [0, 1]; 0.20 means 20% off
pub fn validate_discount_rate(rate: Decimal) -> ValidationResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ValidationError::RateOutOfRange {
            field: "discount rate".to_string(),
            min: Decimal::ZERO,
            max: Decimal::ONE,
        });
    }

    Ok(())
}

/// Validates a category markup rate.
///
/// ## Rules
/// - Must be non-negative; 0.10 means a 10% markup, and selling below base
///   price is not a markup
pub fn validate_markup_rate(rate: Decimal) -> ValidationResult<()> {
    if rate < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "markup rate".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("BEANS").is_ok());
        assert!(validate_product_id("coffee-01").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(dec!(0)).is_ok());
        assert!(validate_unit_price(dec!(10.99)).is_ok());
        assert!(validate_unit_price(dec!(-0.01)).is_err());
    }

    #[test]
    fn test_validate_expiration_days() {
        assert!(validate_expiration_days(1).is_ok());
        assert!(validate_expiration_days(0).is_err());
    }

    #[test]
    fn test_validate_rates() {
        assert!(validate_discount_rate(dec!(0)).is_ok());
        assert!(validate_discount_rate(dec!(0.20)).is_ok());
        assert!(validate_discount_rate(dec!(1)).is_ok());
        assert!(validate_discount_rate(dec!(1.01)).is_err());
        assert!(validate_discount_rate(dec!(-0.2)).is_err());

        assert!(validate_markup_rate(dec!(0.10)).is_ok());
        assert!(validate_markup_rate(dec!(0)).is_ok());
        assert!(validate_markup_rate(dec!(-0.10)).is_err());
    }
}
