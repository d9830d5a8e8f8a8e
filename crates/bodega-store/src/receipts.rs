//! # Receipt Store
//!
//! File-backed receipt persistence.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  receipts/                                                          │
//! │  ├── 9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d.json   ← object form,     │
//! │  │                                                 keyed by full id │
//! │  └── Maria_9b1d_20240515.txt                     ← text form:      │
//! │                                                    cashier, id     │
//! │                                                    prefix, date    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The text rendering resolves product names and base prices through the
//! process-wide catalog, passed in by the caller. Products missing from
//! the catalog render with their id and a zero price instead of failing
//! the whole receipt.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::debug;

use bodega_core::checkout::ReceiptSink;
use bodega_core::{ProductCatalog, Receipt, ShopError, ShopResult};

use crate::error::{StoreError, StoreResult};

/// Number of receipt-id characters used in text file names.
const TEXT_ID_PREFIX_LEN: usize = 4;

// =============================================================================
// Receipt Store
// =============================================================================

/// Stores receipts as files under one directory.
#[derive(Debug, Clone)]
pub struct FsReceiptStore {
    dir: PathBuf,
}

impl FsReceiptStore {
    /// Creates a store rooted at `dir`.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsReceiptStore { dir: dir.into() }
    }

    /// The directory receipts are stored under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a receipt's object-form file.
    fn object_path(&self, receipt_id: &str) -> PathBuf {
        self.dir.join(format!("{receipt_id}.json"))
    }

    /// Path of a receipt's text rendering:
    /// `{cashier_name}_{first 4 chars of id}_{YYYYMMDD}.txt`.
    fn text_path(&self, receipt: &Receipt) -> PathBuf {
        let id_prefix: String = receipt.id.chars().take(TEXT_ID_PREFIX_LEN).collect();
        self.dir.join(format!(
            "{}_{}_{}.txt",
            receipt.cashier_name,
            id_prefix,
            receipt.date.format("%Y%m%d")
        ))
    }

    /// Writes the receipt's object form, keyed by full receipt id.
    pub fn save(&self, receipt: &Receipt) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.object_path(&receipt.id);
        debug!(id = %receipt.id, path = %path.display(), "Saving receipt");

        let encoded = serde_json::to_vec_pretty(receipt)?;
        fs::write(path, encoded)?;
        Ok(())
    }

    /// Writes the receipt's human-readable text rendering.
    pub fn save_text(&self, receipt: &Receipt, catalog: &ProductCatalog) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.text_path(receipt);
        debug!(id = %receipt.id, path = %path.display(), "Saving receipt text");

        fs::write(path, render_text(receipt, catalog))?;
        Ok(())
    }

    /// Loads a receipt from its object form.
    ///
    /// ## Errors
    /// - `NotFound` if no file exists for the id
    /// - `Serialization` if the file contents don't parse
    pub fn load(&self, receipt_id: &str) -> StoreResult<Receipt> {
        let path = self.object_path(receipt_id);
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StoreError::NotFound(receipt_id.to_string()),
            _ => StoreError::Io(err),
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// =============================================================================
// Text Rendering
// =============================================================================

/// Renders a receipt as the text shown to the customer.
///
/// Line items resolve their display name and base unit price through the
/// catalog; an id missing from the catalog falls back to the raw id and
/// a zero price.
pub fn render_text(receipt: &Receipt, catalog: &ProductCatalog) -> String {
    let mut out = String::new();
    out.push_str("Receipt\n");
    out.push_str("========\n");
    out.push_str(&format!("Cashier: {}\n", receipt.cashier_name));
    out.push_str(&format!("Date: {}\n", receipt.date));
    out.push_str("Items:\n");

    for (product_id, quantity) in &receipt.items {
        let (name, price) = match catalog.get(product_id) {
            Some(product) => (product.name.as_str(), product.unit_price),
            None => (product_id.as_str(), Decimal::ZERO),
        };
        out.push_str(&format!("- {name} x {quantity} @ {price} each\n"));
    }

    out.push_str(&format!("\nTotal: ${}\n", receipt.total));
    out.push_str("========\n");
    out
}

// =============================================================================
// ReceiptSink Implementation
// =============================================================================

/// Adapts the store to the core's persistence seam. Failures surface as
/// the core's generic storage error kind.
impl ReceiptSink for FsReceiptStore {
    fn save(&mut self, receipt: &Receipt) -> ShopResult<()> {
        FsReceiptStore::save(self, receipt).map_err(|err| ShopError::Storage(err.to_string()))
    }

    fn save_text(&mut self, receipt: &Receipt, catalog: &ProductCatalog) -> ShopResult<()> {
        FsReceiptStore::save_text(self, receipt, catalog)
            .map_err(|err| ShopError::Storage(err.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
