//! # Stock Module
//!
//! Batch-level stock bookkeeping: dated batches per product, consumed
//! oldest-arrival-first, pruned when expired.
//!
//! ## Batch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Batch Lifecycle                               │
//! │                                                                     │
//! │  1. ARRIVE                                                          │
//! │     └── add_batch() / receive_delivery() → new queue entry          │
//! │                                                                     │
//! │  2. CONSUME (oldest first)                                          │
//! │     └── remove_quantity() → front batches drain; a batch larger     │
//! │         than the remaining need survives with reduced quantity      │
//! │                                                                     │
//! │  3. EXPIRE (perishables only)                                       │
//! │     └── prune_expired() → drop batches past arrival + shelf life    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consumption failure semantics
//! `remove_quantity` drains batches as it goes. When the product's batches
//! run out before the requested amount is covered, it fails with
//! `OutOfStock` and the batches consumed during the attempt STAY consumed.
//! Callers that need all-or-nothing behavior must check `total_quantity`
//! first (basket allocation does exactly that).

use std::collections::{HashMap, VecDeque};

use chrono::{Duration, NaiveDate};

use crate::error::{ShopError, ShopResult};
use crate::types::{Batch, Delivery, ProductCatalog};
use crate::validation::validate_quantity;

// =============================================================================
// Batch Queue
// =============================================================================

/// An ordered collection of batches, earliest arrival date first.
///
/// Batches with equal arrival dates keep their insertion order, so
/// consumption order is deterministic within a process run. Only
/// "insert" and "peek/pop earliest" are exposed; nothing else in the
/// system depends on the container's internals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchQueue {
    batches: VecDeque<Batch>,
}

impl BatchQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        BatchQueue::default()
    }

    /// Inserts a batch, keeping the queue ordered by arrival date.
    ///
    /// A batch with the same arrival date as existing entries goes after
    /// them (stable insert).
    pub fn push(&mut self, batch: Batch) {
        let at = self
            .batches
            .iter()
            .position(|b| b.arrival_date > batch.arrival_date)
            .unwrap_or(self.batches.len());
        self.batches.insert(at, batch);
    }

    /// The batch with the earliest arrival date, if any.
    #[inline]
    pub fn peek_earliest(&self) -> Option<&Batch> {
        self.batches.front()
    }

    /// Removes and returns the batch with the earliest arrival date.
    #[inline]
    pub fn pop_earliest(&mut self) -> Option<Batch> {
        self.batches.pop_front()
    }

    /// Mutable access to the earliest batch (for partial consumption).
    #[inline]
    fn peek_earliest_mut(&mut self) -> Option<&mut Batch> {
        self.batches.front_mut()
    }

    /// Iterates batches in ascending arrival-date order.
    pub fn iter(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter()
    }

    /// Number of batches in the queue.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Checks if the queue holds no batches.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Sum of all batch quantities.
    pub fn total_quantity(&self) -> u32 {
        self.batches.iter().map(|b| b.quantity).sum()
    }

    /// Keeps only the batches matching the predicate.
    pub fn retain(&mut self, keep: impl FnMut(&Batch) -> bool) {
        self.batches.retain(keep);
    }
}

impl<'a> IntoIterator for &'a BatchQueue {
    type Item = &'a Batch;
    type IntoIter = std::collections::vec_deque::Iter<'a, Batch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}

// =============================================================================
// Stock Room
// =============================================================================

/// All batches on hand, per product id.
#[derive(Debug, Clone, Default)]
pub struct StockRoom {
    batches: HashMap<String, BatchQueue>,
}

impl StockRoom {
    /// Creates an empty stock room.
    pub fn new() -> Self {
        StockRoom::default()
    }

    /// Adds a batch of a product, creating the product's queue if absent.
    ///
    /// Every call creates a distinct batch entry; batches sharing an
    /// arrival date are never merged.
    pub fn add_batch(
        &mut self,
        product_id: &str,
        quantity: u32,
        arrival_date: NaiveDate,
    ) -> ShopResult<()> {
        validate_quantity(quantity)?;
        self.batches
            .entry(product_id.to_string())
            .or_default()
            .push(Batch::new(arrival_date, quantity));
        Ok(())
    }

    /// Removes `amount` units of a product, consuming batches oldest first.
    ///
    /// A batch holding more than the remaining need survives with its
    /// quantity reduced; smaller or equal batches are discarded whole.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the product has no stock queue or an empty
    ///   one (checked once, up front)
    /// - `OutOfStock` if the batches run out before `amount` is covered.
    ///   Batches already discarded during the attempt are NOT restored;
    ///   callers needing all-or-nothing semantics must pre-check
    ///   [`total_quantity`](Self::total_quantity)
    pub fn remove_quantity(&mut self, product_id: &str, amount: u32) -> ShopResult<()> {
        validate_quantity(amount)?;

        let queue = match self.batches.get_mut(product_id) {
            Some(queue) if !queue.is_empty() => queue,
            _ => return Err(ShopError::product_not_found(product_id)),
        };

        let mut remaining = amount;
        while remaining > 0 {
            let Some(batch) = queue.peek_earliest_mut() else {
                break;
            };
            if batch.quantity > remaining {
                batch.quantity -= remaining;
                remaining = 0;
            } else {
                remaining -= batch.quantity;
                queue.pop_earliest();
            }
        }

        if remaining > 0 {
            return Err(ShopError::out_of_stock(
                product_id,
                amount - remaining,
                amount,
            ));
        }
        Ok(())
    }

    /// Total units on hand for a product.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the product has no stock queue or an empty one
    pub fn total_quantity(&self, product_id: &str) -> ShopResult<u32> {
        match self.batches.get(product_id) {
            Some(queue) if !queue.is_empty() => Ok(queue.total_quantity()),
            _ => Err(ShopError::product_not_found(product_id)),
        }
    }

    /// The batch queue for a product, if it has one.
    pub fn product_batches(&self, product_id: &str) -> Option<&BatchQueue> {
        self.batches.get(product_id)
    }

    /// Drops every expired batch of every perishable product.
    ///
    /// A batch is expired when `arrival_date + expiration_days < today`.
    /// Batches of non-perishable products, and of products absent from the
    /// catalog, are left untouched.
    pub fn prune_expired(&mut self, catalog: &ProductCatalog, today: NaiveDate) {
        for (product_id, queue) in &mut self.batches {
            let Some(days) = catalog.get(product_id).and_then(|p| p.expiration_days()) else {
                continue;
            };
            let shelf_life = Duration::days(i64::from(days));
            queue.retain(|batch| batch.arrival_date + shelf_life >= today);
        }
    }

    /// Merges a delivery into stock, one new batch per delivered product.
    pub fn receive_delivery(&mut self, delivery: Delivery) -> ShopResult<()> {
        for (product_id, batch) in delivery.products {
            self.add_batch(&product_id, batch.quantity, batch.arrival_date)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Product};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_batch_keeps_distinct_entries() {
        let mut stock = StockRoom::new();
        stock.add_batch("MILK", 5, date(2024, 5, 1)).unwrap();
        stock.add_batch("MILK", 3, date(2024, 5, 1)).unwrap();

        let queue = stock.product_batches("MILK").unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(stock.total_quantity("MILK").unwrap(), 8);
    }

    #[test]
    fn test_add_batch_rejects_zero_quantity() {
        let mut stock = StockRoom::new();
        assert!(stock.add_batch("MILK", 0, date(2024, 5, 1)).is_err());
    }

    #[test]
    fn test_queue_orders_by_arrival_date() {
        let mut queue = BatchQueue::new();
        queue.push(Batch::new(date(2024, 5, 3), 1));
        queue.push(Batch::new(date(2024, 5, 1), 2));
        queue.push(Batch::new(date(2024, 5, 2), 3));

        let dates: Vec<NaiveDate> = queue.iter().map(|b| b.arrival_date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 5, 1), date(2024, 5, 2), date(2024, 5, 3)]
        );
        assert_eq!(queue.peek_earliest().unwrap().quantity, 2);
    }

    #[test]
    fn test_same_date_batches_consume_in_insertion_order() {
        let mut stock = StockRoom::new();
        stock.add_batch("MILK", 2, date(2024, 5, 1)).unwrap();
        stock.add_batch("MILK", 7, date(2024, 5, 1)).unwrap();

        // Drains the first-inserted batch, then one unit of the second
        stock.remove_quantity("MILK", 3).unwrap();

        let queue = stock.product_batches("MILK").unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek_earliest().unwrap().quantity, 6);
    }

    #[test]
    fn test_remove_consumes_oldest_first() {
        let mut stock = StockRoom::new();
        stock.add_batch("MILK", 5, date(2024, 5, 1)).unwrap();
        stock.add_batch("MILK", 10, date(2024, 5, 8)).unwrap();

        stock.remove_quantity("MILK", 7).unwrap();

        // Oldest batch fully consumed, newer batch survives reduced
        assert_eq!(stock.total_quantity("MILK").unwrap(), 8);
        let queue = stock.product_batches("MILK").unwrap();
        assert_eq!(queue.len(), 1);
        let survivor = queue.peek_earliest().unwrap();
        assert_eq!(survivor.arrival_date, date(2024, 5, 8));
        assert_eq!(survivor.quantity, 8);
    }

    #[test]
    fn test_remove_decrements_total_exactly() {
        let mut stock = StockRoom::new();
        stock.add_batch("MILK", 4, date(2024, 5, 1)).unwrap();
        stock.add_batch("MILK", 6, date(2024, 5, 2)).unwrap();
        let before = stock.total_quantity("MILK").unwrap();

        stock.remove_quantity("MILK", 4).unwrap();
        assert_eq!(stock.total_quantity("MILK").unwrap(), before - 4);

        stock.remove_quantity("MILK", 6).unwrap();
        // Queue is drained; an empty queue reads as product-not-found
        assert!(matches!(
            stock.total_quantity("MILK"),
            Err(ShopError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_remove_missing_product_fails_up_front() {
        let mut stock = StockRoom::new();
        assert!(matches!(
            stock.remove_quantity("MILK", 1),
            Err(ShopError::ProductNotFound(_))
        ));

        // Same for a queue that exists but has been drained
        stock.add_batch("MILK", 2, date(2024, 5, 1)).unwrap();
        stock.remove_quantity("MILK", 2).unwrap();
        assert!(matches!(
            stock.remove_quantity("MILK", 1),
            Err(ShopError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_remove_past_available_is_destructive() {
        let mut stock = StockRoom::new();
        stock.add_batch("MILK", 5, date(2024, 5, 1)).unwrap();
        stock.add_batch("MILK", 3, date(2024, 5, 8)).unwrap();

        let err = stock.remove_quantity("MILK", 20).unwrap_err();
        assert!(matches!(
            err,
            ShopError::OutOfStock {
                available: 8,
                requested: 20,
                ..
            }
        ));

        // The failed attempt drained every batch and nothing is restored
        assert!(stock.product_batches("MILK").unwrap().is_empty());
        assert!(stock.total_quantity("MILK").is_err());
    }

    #[test]
    fn test_prune_expired_drops_exactly_the_expired_batches() {
        let mut catalog = ProductCatalog::new();
        catalog
            .insert(Product::perishable(
                "MILK",
                "Whole Milk 1L",
                dec!(1.20),
                Category::Food,
                5,
            ))
            .unwrap();
        catalog
            .insert(Product::non_perishable(
                "SOAP",
                "Bar Soap",
                dec!(0.80),
                Category::NonFood,
            ))
            .unwrap();

        let today = date(2024, 5, 15);
        let mut stock = StockRoom::new();
        // Expires May 14 < today: pruned
        stock.add_batch("MILK", 5, date(2024, 5, 9)).unwrap();
        // Expires exactly today: kept
        stock.add_batch("MILK", 3, date(2024, 5, 10)).unwrap();
        // Fresh: kept
        stock.add_batch("MILK", 2, date(2024, 5, 12)).unwrap();
        // Non-perishable, ancient: kept
        stock.add_batch("SOAP", 9, date(2020, 1, 1)).unwrap();
        // Not in the catalog: kept
        stock.add_batch("MYSTERY", 1, date(2020, 1, 1)).unwrap();

        stock.prune_expired(&catalog, today);

        assert_eq!(stock.total_quantity("MILK").unwrap(), 5);
        let dates: Vec<NaiveDate> = stock
            .product_batches("MILK")
            .unwrap()
            .iter()
            .map(|b| b.arrival_date)
            .collect();
        assert_eq!(dates, vec![date(2024, 5, 10), date(2024, 5, 12)]);
        assert_eq!(stock.total_quantity("SOAP").unwrap(), 9);
        assert_eq!(stock.total_quantity("MYSTERY").unwrap(), 1);
    }

    #[test]
    fn test_receive_delivery_merges_every_product() {
        let mut delivery = Delivery::new();
        delivery.add("MILK", Batch::new(date(2024, 5, 1), 10));
        delivery.add("SOAP", Batch::new(date(2024, 5, 1), 4));

        let mut stock = StockRoom::new();
        stock.add_batch("MILK", 2, date(2024, 4, 28)).unwrap();
        stock.receive_delivery(delivery).unwrap();

        assert_eq!(stock.total_quantity("MILK").unwrap(), 12);
        assert_eq!(stock.total_quantity("SOAP").unwrap(), 4);
        assert_eq!(stock.product_batches("MILK").unwrap().len(), 2);
    }
}
