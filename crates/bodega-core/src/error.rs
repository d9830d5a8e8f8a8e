//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bodega-core errors (this file)                                     │
//! │  ├── ShopError        - Business rule / domain failures             │
//! │  └── ValidationError  - Input precondition failures                 │
//! │                                                                     │
//! │  bodega-store errors (separate crate)                               │
//! │  └── StoreError       - Receipt file operation failures             │
//! │                                                                     │
//! │  Flow: ValidationError → ShopError ← StoreError (via Storage)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Raised at the point of detection and propagated with `?`; nothing is
//!    retried internally

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Category;

// =============================================================================
// Shop Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages by a host.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Product id has no catalog entry
    /// - Product has no stock entry (or an empty one) where one was required
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds available stock.
    ///
    /// ## When This Occurs
    /// - Allocating more units to a basket than the stock room holds
    /// - Removing stock after every batch of the product has been drained
    ///
    /// Note: when raised mid-removal, batches consumed during the attempt
    /// stay consumed (see `StockRoom::remove_quantity`).
    #[error("Not enough stock for {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: String,
        available: u32,
        requested: u32,
    },

    /// Basket total exceeds the customer's budget at checkout.
    ///
    /// Carries both amounts so the caller can report the shortfall.
    #[error("Budget of {budget} is insufficient for total cost: {total}")]
    InsufficientFunds { total: Decimal, budget: Decimal },

    /// No markup rate registered for a category that is actually in use.
    #[error("No markup rate configured for category {0:?}")]
    MissingMarkup(Category),

    /// Receipt persistence failed.
    ///
    /// Fatal to the current operation only; in-memory stock is untouched.
    #[error("Receipt storage failed: {0}")]
    Storage(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ShopError {
    /// Creates a ProductNotFound error for a given product id.
    pub fn product_not_found(product_id: impl Into<String>) -> Self {
        ShopError::ProductNotFound(product_id.into())
    }

    /// Creates an OutOfStock error with consumption context.
    pub fn out_of_stock(product_id: impl Into<String>, available: u32, requested: u32) -> Self {
        ShopError::OutOfStock {
            product_id: product_id.into(),
            available,
            requested,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when an argument doesn't meet a precondition.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// A fractional rate is outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    RateOutOfRange {
        field: String,
        min: Decimal,
        max: Decimal,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
