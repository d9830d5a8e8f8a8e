//! # Checkout Module
//!
//! Basket valuation and purchase processing at a cashier desk.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      process_purchase                               │
//! │                                                                     │
//! │  1. VALUE THE BASKET                                                │
//! │     └── total_basket_price() → per-batch pricing at effective       │
//! │         expiry dates, double-rounded total                          │
//! │                                                                     │
//! │  2a. total > budget                                                 │
//! │     └── push every basket batch back into stock (restock)           │
//! │     └── fail InsufficientFunds { total, budget }                    │
//! │                                                                     │
//! │  2b. total ≤ budget                                                 │
//! │     └── build Receipt (uuid, cashier, date, quantities, total)      │
//! │     └── persist via the ReceiptSink (object form + text form)       │
//! │     └── DONE — irreversible; stock was already decremented when     │
//! │         the basket was filled, so success mutates nothing           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Valuation is read-only: it never touches stock. The only compensating
//! mutation in the whole flow is the restock on the insufficient-funds
//! path, which re-inserts the basket's snapshot batches as new stock
//! entries (same-date batches are not merged).

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::basket::Basket;
use crate::clock::Clock;
use crate::error::{ShopError, ShopResult};
use crate::money::{line_total, round_money};
use crate::pricing::price_on_date;
use crate::types::{CashierDesk, Customer, ProductCatalog, Receipt, Shop};

// =============================================================================
// Receipt Sink
// =============================================================================

/// Persistence seam for finalized receipts.
///
/// The core only needs a "persist this receipt" capability; the actual
/// storage (filesystem, database, in-memory test recorder) lives behind
/// this trait. Implementations report failures as `ShopError::Storage`,
/// which aborts the purchase being finalized but never corrupts stock.
pub trait ReceiptSink {
    /// Persists the receipt in its object form, keyed by full receipt id.
    fn save(&mut self, receipt: &Receipt) -> ShopResult<()>;

    /// Persists a human-readable text rendering of the receipt.
    ///
    /// The catalog resolves product names and base prices for the line
    /// items; it is the one process-wide catalog, passed in explicitly.
    fn save_text(&mut self, receipt: &Receipt, catalog: &ProductCatalog) -> ShopResult<()>;
}

// =============================================================================
// Basket Valuation
// =============================================================================

/// Prices one basket.
///
/// Each batch is priced at its effective date: for perishables the
/// batch's actual expiry date (`arrival + expiration_days`, which decides
/// whether the near-expiry discount applies), for non-perishables simply
/// "today". Per-batch line totals use the engine's rounded unit price;
/// the sum is then rounded again. This double rounding is intentional,
/// kept for output compatibility.
pub fn total_basket_price(
    shop: &Shop,
    catalog: &ProductCatalog,
    basket: &Basket,
    clock: &dyn Clock,
) -> ShopResult<Decimal> {
    let today = clock.today();
    let mut total = Decimal::ZERO;

    for (product_id, batches) in basket.items() {
        let product = catalog.require(product_id)?;
        for batch in batches {
            let effective_date = match product.expiration_days() {
                Some(days) => batch.arrival_date + Duration::days(i64::from(days)),
                None => today,
            };
            let unit_price = price_on_date(shop, catalog, product_id, effective_date, today)?;
            total += line_total(unit_price, batch.quantity);
        }
    }

    Ok(round_money(total))
}

/// Sums the basket totals of several customers.
///
/// Accumulates the already-rounded per-basket totals; no further rounding
/// pass is applied.
pub fn total_customer_spending(
    shop: &Shop,
    catalog: &ProductCatalog,
    customers: &[Customer],
    clock: &dyn Clock,
) -> ShopResult<Decimal> {
    let mut income = Decimal::ZERO;
    for customer in customers {
        income += total_basket_price(shop, catalog, &customer.basket, clock)?;
    }
    Ok(income)
}

// =============================================================================
// Receipts
// =============================================================================

/// Builds the immutable receipt record for an already-valued basket.
fn build_receipt(cashier_name: &str, basket: &Basket, total: Decimal, date: NaiveDate) -> Receipt {
    Receipt {
        id: Uuid::new_v4().to_string(),
        cashier_name: cashier_name.to_string(),
        date,
        items: basket.total_quantities(),
        total,
    }
}

/// Values a basket and builds its receipt, without persisting anything.
pub fn create_receipt(
    shop: &Shop,
    catalog: &ProductCatalog,
    basket: &Basket,
    cashier_name: &str,
    clock: &dyn Clock,
) -> ShopResult<Receipt> {
    let total = total_basket_price(shop, catalog, basket, clock)?;
    Ok(build_receipt(cashier_name, basket, total, clock.today()))
}

// =============================================================================
// Purchase Processing
// =============================================================================

/// Settles one basket against a budget at a cashier desk.
///
/// On success returns the persisted receipt; stock is untouched because
/// the basket's units were already removed from stock at allocation time.
///
/// ## Errors
/// - `InsufficientFunds` if the basket total exceeds the budget. Before
///   failing, every basket batch is pushed back into stock exactly as
///   snapshotted. The basket itself is left as-is and must be abandoned
///   by the caller: its snapshots now describe quantities that live in
///   stock again.
/// - `Storage` if persisting the receipt fails; stock is not touched.
pub fn process_purchase(
    shop: &mut Shop,
    catalog: &ProductCatalog,
    basket: &Basket,
    budget: Decimal,
    desk: &CashierDesk,
    clock: &dyn Clock,
    receipts: &mut dyn ReceiptSink,
) -> ShopResult<Receipt> {
    let total = total_basket_price(shop, catalog, basket, clock)?;

    if total > budget {
        for (product_id, batches) in basket.items() {
            for batch in batches {
                shop.stock
                    .add_batch(product_id, batch.quantity, batch.arrival_date)?;
            }
        }
        return Err(ShopError::InsufficientFunds { total, budget });
    }

    let receipt = build_receipt(&desk.cashier.name, basket, total, clock.today());
    receipts.save(&receipt)?;
    receipts.save_text(&receipt, catalog)?;
    Ok(receipt)
}

/// Processes every customer's basket against the same desk, in order.
///
/// Each purchase is independent: a customer failing (typically with
/// `InsufficientFunds`) never halts the batch. Results are returned per
/// customer, in input order, for the caller to report.
pub fn process_purchase_for_all_customers(
    shop: &mut Shop,
    catalog: &ProductCatalog,
    customers: &[Customer],
    desk: &CashierDesk,
    clock: &dyn Clock,
    receipts: &mut dyn ReceiptSink,
) -> Vec<ShopResult<Receipt>> {
    customers
        .iter()
        .map(|customer| {
            process_purchase(
                shop,
                catalog,
                &customer.basket,
                customer.budget,
                desk,
                clock,
                receipts,
            )
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
