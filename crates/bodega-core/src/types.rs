//! # Domain Types
//!
//! Core domain types used throughout Bodega.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │      Shop      │   │    Receipt     │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (String)   │   │  name          │   │  id (UUID)     │      │
//! │  │  name          │   │  markup_rates  │   │  cashier_name  │      │
//! │  │  unit_price    │   │  discount cfg  │   │  date          │      │
//! │  │  category      │   │  desks         │   │  items         │      │
//! │  │  kind          │   │  stock         │   │  total         │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │     Batch      │   │    Category    │   │  ProductKind   │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  arrival_date  │   │  Food          │   │  Perishable    │      │
//! │  │  quantity      │   │  NonFood       │   │  NonPerishable │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable after catalog load; the catalog is populated once
//! at startup and passed around as a read-only reference. Exactly one
//! catalog instance exists per process — no component ever constructs its
//! own empty one.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::basket::Basket;
use crate::error::{ShopError, ShopResult};
use crate::money::round_money;
use crate::stock::StockRoom;
use crate::validation::{validate_discount_rate, validate_expiration_days, validate_markup_rate,
    validate_product_id, validate_unit_price};

// =============================================================================
// Category
// =============================================================================

/// Product category, used to select the shop's markup rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    NonFood,
}

// =============================================================================
// Product
// =============================================================================

/// Distinguishes products that expire from those that do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Expires `expiration_days` after a batch's arrival date.
    Perishable { expiration_days: u32 },
    /// Never expires.
    NonPerishable,
}

/// A product available for sale.
///
/// Immutable after catalog load. The `unit_price` is the base price before
/// markup and discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique business identifier, the catalog key.
    pub id: String,

    /// Display name shown on receipts.
    pub name: String,

    /// Base price per unit, before markup/discount.
    pub unit_price: Decimal,

    /// Category, used to look up the markup rate.
    pub category: Category,

    /// Perishable or non-perishable.
    pub kind: ProductKind,
}

impl Product {
    /// Creates a perishable product.
    pub fn perishable(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        category: Category,
        expiration_days: u32,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            unit_price,
            category,
            kind: ProductKind::Perishable { expiration_days },
        }
    }

    /// Creates a non-perishable product.
    pub fn non_perishable(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        category: Category,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            unit_price,
            category,
            kind: ProductKind::NonPerishable,
        }
    }

    /// Days until a batch of this product expires, if it expires at all.
    #[inline]
    pub fn expiration_days(&self) -> Option<u32> {
        match self.kind {
            ProductKind::Perishable { expiration_days } => Some(expiration_days),
            ProductKind::NonPerishable => None,
        }
    }

    /// Checks whether the product expires.
    #[inline]
    pub fn is_perishable(&self) -> bool {
        matches!(self.kind, ProductKind::Perishable { .. })
    }
}

// =============================================================================
// Product Catalog
// =============================================================================

/// The process-wide product registry, keyed by product id.
///
/// Populated once at startup and treated as read-only afterwards. Lookup of
/// an absent id is an error, never a silent default.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        ProductCatalog::default()
    }

    /// Inserts a product, validating its invariants.
    ///
    /// Replaces any previous entry with the same id.
    pub fn insert(&mut self, product: Product) -> ShopResult<()> {
        validate_product_id(&product.id)?;
        validate_unit_price(product.unit_price)?;
        if let Some(days) = product.expiration_days() {
            validate_expiration_days(days)?;
        }
        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Looks up a product by id.
    #[inline]
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Looks up a product by id, failing with `ProductNotFound` if absent.
    pub fn require(&self, product_id: &str) -> ShopResult<&Product> {
        self.products
            .get(product_id)
            .ok_or_else(|| ShopError::product_not_found(product_id))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates over all catalog entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Product)> {
        self.products.iter()
    }
}

// =============================================================================
// Batch
// =============================================================================

/// A quantity of one product received on one arrival date.
///
/// Batches are consumed oldest-arrival-first. The quantity is decremented on
/// partial consumption; a batch that reaches zero is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Date the batch arrived in stock.
    pub arrival_date: NaiveDate,

    /// Units remaining in this batch.
    pub quantity: u32,
}

impl Batch {
    /// Creates a batch.
    #[inline]
    pub fn new(arrival_date: NaiveDate, quantity: u32) -> Self {
        Batch {
            arrival_date,
            quantity,
        }
    }
}

// =============================================================================
// Cashier & Desk
// =============================================================================

/// A cashier employed by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cashier {
    pub name: String,
    pub salary: Decimal,
}

impl Cashier {
    pub fn new(name: impl Into<String>, salary: Decimal) -> Self {
        Cashier {
            name: name.into(),
            salary,
        }
    }
}

/// A checkout desk staffed by one cashier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashierDesk {
    pub cashier: Cashier,
}

impl CashierDesk {
    pub fn new(cashier: Cashier) -> Self {
        CashierDesk { cashier }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer with a budget and a basket.
///
/// Ephemeral: exists for the duration of one shopping/checkout cycle.
#[derive(Debug, Clone, Default)]
pub struct Customer {
    pub budget: Decimal,
    pub basket: Basket,
}

impl Customer {
    /// Creates a customer with an empty basket.
    pub fn new(budget: Decimal) -> Self {
        Customer {
            budget,
            basket: Basket::new(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The immutable record of a completed, funded purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt id (UUID v4 string).
    pub id: String,

    /// Name of the cashier who processed the purchase.
    pub cashier_name: String,

    /// Purchase date.
    pub date: NaiveDate,

    /// Total quantity purchased per product id.
    pub items: BTreeMap<String, u32>,

    /// Final basket total.
    pub total: Decimal,
}

// =============================================================================
// Delivery
// =============================================================================

/// An incoming delivery: one batch per product, to be merged into stock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delivery {
    pub products: BTreeMap<String, Batch>,
}

impl Delivery {
    /// Creates an empty delivery.
    pub fn new() -> Self {
        Delivery::default()
    }

    /// Adds a batch of one product to the delivery.
    pub fn add(&mut self, product_id: impl Into<String>, batch: Batch) {
        self.products.insert(product_id.into(), batch);
    }
}

// =============================================================================
// Shop
// =============================================================================

/// A shop: pricing configuration, cashier desks and the stock room.
///
/// The shop exclusively owns its stock; units allocated to a basket are
/// transferred out of stock, never shared.
#[derive(Debug, Clone)]
pub struct Shop {
    /// Display name.
    pub name: String,

    /// Markup rate per category, e.g. 0.10 for a 10% markup.
    ///
    /// Every category used by a cataloged product must have an entry here,
    /// otherwise pricing that product fails.
    markup_rates: HashMap<Category, Decimal>,

    /// Width of the near-expiry discount window, in days from "today".
    pub days_before_expiry_discount: i64,

    /// Fractional near-expiry discount, in [0, 1].
    pub discount_rate: Decimal,

    /// Checkout desks.
    pub desks: Vec<CashierDesk>,

    /// Batches on hand, per product.
    pub stock: StockRoom,
}

impl Shop {
    /// Creates a shop with no markup rates, desks or stock.
    ///
    /// Fails if `discount_rate` is outside [0, 1].
    pub fn new(
        name: impl Into<String>,
        days_before_expiry_discount: i64,
        discount_rate: Decimal,
    ) -> ShopResult<Self> {
        validate_discount_rate(discount_rate)?;
        Ok(Shop {
            name: name.into(),
            markup_rates: HashMap::new(),
            days_before_expiry_discount,
            discount_rate,
            desks: Vec::new(),
            stock: StockRoom::new(),
        })
    }

    /// Registers the markup rate for a category.
    ///
    /// Fails if the rate is negative.
    pub fn set_markup(&mut self, category: Category, rate: Decimal) -> ShopResult<()> {
        validate_markup_rate(rate)?;
        self.markup_rates.insert(category, rate);
        Ok(())
    }

    /// Looks up the markup rate for a category.
    #[inline]
    pub fn markup_rate(&self, category: Category) -> Option<Decimal> {
        self.markup_rates.get(&category).copied()
    }

    /// Adds a checkout desk.
    pub fn add_desk(&mut self, desk: CashierDesk) {
        self.desks.push(desk);
    }

    /// Sum of all desk cashiers' salaries.
    pub fn cashier_salaries(&self) -> Decimal {
        self.desks
            .iter()
            .map(|desk| desk.cashier.salary)
            .sum()
    }

    /// Total cost of running the shop for a period: deliveries plus salaries.
    pub fn operating_cost(&self, delivery_cost: Decimal) -> Decimal {
        delivery_cost + self.cashier_salaries()
    }

    /// Profit for a period: income minus operating cost, rounded to cents.
    pub fn profit(&self, income: Decimal, delivery_cost: Decimal) -> Decimal {
        round_money(income - self.operating_cost(delivery_cost))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
