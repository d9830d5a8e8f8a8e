//! # bodega-store: Receipt Persistence for Bodega
//!
//! This crate stores finalized receipts on the local filesystem, in two
//! forms per receipt: a JSON object file keyed by the full receipt id,
//! and a human-readable text rendering.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Bodega Data Flow                              │
//! │                                                                     │
//! │  checkout::process_purchase (bodega-core)                           │
//! │       │                                                             │
//! │       ▼  via the ReceiptSink trait                                  │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 bodega-store (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌────────────────┐        ┌────────────────┐             │   │
//! │  │   │ FsReceiptStore │        │  render_text   │             │   │
//! │  │   │  save / load   │───────►│ catalog-backed │             │   │
//! │  │   │  save_text     │        │ line items     │             │   │
//! │  │   └────────────────┘        └────────────────┘             │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │                                ▼                                    │
//! │                    receipts/ directory on disk                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`receipts`] - The file-backed store and text rendering
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bodega_store::FsReceiptStore;
//!
//! let store = FsReceiptStore::new("receipts");
//! let receipt = store.load("9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d")?;
//! # Ok::<(), bodega_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod receipts;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use receipts::{render_text, FsReceiptStore};
