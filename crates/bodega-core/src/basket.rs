//! # Basket Module
//!
//! A customer's basket and the stock-to-basket allocation step.
//!
//! ## Allocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  add_to_basket(shop, basket, "MILK", 7)                             │
//! │       │                                                             │
//! │       ├── total on hand < 7?  → OutOfStock (nothing changes)        │
//! │       │                                                             │
//! │       ├── snapshot batches oldest-first, splitting the last one     │
//! │       │   so the basket receives EXACTLY 7 units                    │
//! │       │                                                             │
//! │       └── decrement stock by 7 (same oldest-first order)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Basket entries are value copies of `{arrival_date, quantity}` taken at
//! allocation time. They never alias live stock batches, so later stock
//! mutations cannot reach into a basket (and vice versa). The allocated
//! quantity is transferred: removed from the stock room, owned by the
//! basket until checkout finalizes or restocks it.

use std::collections::BTreeMap;

use crate::error::{ShopError, ShopResult};
use crate::stock::BatchQueue;
use crate::types::{Batch, Shop};
use crate::validation::validate_quantity;

// =============================================================================
// Basket
// =============================================================================

/// The batches tentatively allocated to one customer, per product id.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    items: BTreeMap<String, BatchQueue>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Basket::default()
    }

    /// Checks if nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over allocated products and their batch snapshots.
    pub fn items(&self) -> impl Iterator<Item = (&String, &BatchQueue)> {
        self.items.iter()
    }

    /// The batch snapshots allocated for one product, if any.
    pub fn get(&self, product_id: &str) -> Option<&BatchQueue> {
        self.items.get(product_id)
    }

    /// Total allocated units per product id (the receipt line quantities).
    pub fn total_quantities(&self) -> BTreeMap<String, u32> {
        self.items
            .iter()
            .map(|(product_id, batches)| (product_id.clone(), batches.total_quantity()))
            .collect()
    }
}

// =============================================================================
// Allocation
// =============================================================================

/// Moves `amount` units of a product from shop stock into the basket.
///
/// Availability is checked up front, so a failed allocation leaves both
/// stock and basket untouched. On success the basket gains snapshot
/// batches covering exactly `amount` units, oldest arrival first (the last
/// snapshot is a partial copy when a stock batch is only partly taken),
/// and the stock room is decremented by the same amount.
///
/// ## Errors
/// - `ProductNotFound` if the product has no stock queue or an empty one
/// - `OutOfStock` if `amount` exceeds the total on hand
pub fn add_to_basket(
    shop: &mut Shop,
    basket: &mut Basket,
    product_id: &str,
    amount: u32,
) -> ShopResult<()> {
    validate_quantity(amount)?;

    let available = shop.stock.total_quantity(product_id)?;
    if amount > available {
        return Err(ShopError::out_of_stock(product_id, available, amount));
    }

    let allocated = basket.items.entry(product_id.to_string()).or_default();
    let mut remaining = amount;
    for batch in shop.stock.product_batches(product_id).into_iter().flatten() {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(batch.quantity);
        allocated.push(Batch::new(batch.arrival_date, take));
        remaining -= take;
    }

    shop.stock.remove_quantity(product_id, amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
