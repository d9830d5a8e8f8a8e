//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of Bodega. It contains the shop's inventory
//! and checkout logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Bodega Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    Host Application                         │   │
//! │  │   catalog load ──► deliveries ──► baskets ──► checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ bodega-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐          │   │
//! │  │  │  stock  │ │ pricing │ │ basket  │ │ checkout │          │   │
//! │  │  │ Batches │ │ markup+ │ │ alloc.  │ │ valuation│          │   │
//! │  │  │ FIFO    │ │ discount│ │ snapshot│ │ purchase │          │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘          │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │ ReceiptSink                        │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              bodega-store (Receipt Persistence)             │   │
//! │  │          object files + text renderings on disk             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Shop, Batch, Receipt, etc.)
//! - [`stock`] - Batch queues and the stock room (oldest-first consumption)
//! - [`pricing`] - Sale price computation (markup + near-expiry discount)
//! - [`basket`] - Basket allocation with snapshot semantics
//! - [`checkout`] - Basket valuation and purchase processing
//! - [`money`] - Decimal helpers (half-up rounding to cents)
//! - [`clock`] - Injectable "today" source
//! - [`error`] - Domain error types
//! - [`validation`] - Input precondition checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic given the shop, catalog and clock
//! 2. **No I/O**: receipt persistence sits behind the [`checkout::ReceiptSink`]
//!    trait, implemented outside this crate
//! 3. **Exact Decimal Money**: all monetary values are `rust_decimal`
//!    decimals, rounded half-up to 2 places as the final step only
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **Single-threaded**: no internal locking; a multi-threaded host must
//!    serialize access to a `Shop` around stock mutation and checkout
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::basket::add_to_basket;
//! use bodega_core::checkout::total_basket_price;
//! use bodega_core::clock::FixedClock;
//! use bodega_core::{Basket, Category, Product, ProductCatalog, Shop};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
//! let clock = FixedClock(today);
//!
//! let mut catalog = ProductCatalog::new();
//! catalog
//!     .insert(Product::perishable("BEANS", "Baked Beans", dec!(0.99), Category::Food, 5))
//!     .unwrap();
//!
//! let mut shop = Shop::new("Corner Shop", 3, dec!(0.20)).unwrap();
//! shop.set_markup(Category::Food, dec!(0.10)).unwrap();
//! // Arrived May 12, expires May 17: inside the 3-day discount window
//! let arrival = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
//! shop.stock.add_batch("BEANS", 10, arrival).unwrap();
//!
//! let mut basket = Basket::new();
//! add_to_basket(&mut shop, &mut basket, "BEANS", 3).unwrap();
//!
//! let total = total_basket_price(&shop, &catalog, &basket, &clock).unwrap();
//! assert_eq!(total, dec!(2.61));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod checkout;
pub mod clock;
pub mod error;
pub mod money;
pub mod pricing;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Shop` instead of
// `use bodega_core::types::Shop`

pub use basket::Basket;
pub use checkout::ReceiptSink;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ShopError, ShopResult, ValidationError};
pub use stock::{BatchQueue, StockRoom};
pub use types::*;
