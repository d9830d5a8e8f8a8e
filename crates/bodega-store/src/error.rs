//! # Store Error Types
//!
//! Error types for receipt file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ShopError::Storage (at the ReceiptSink boundary)                   │
//! │                                                                     │
//! │  A storage failure is fatal to that operation only; in-memory       │
//! │  stock state is never touched by this crate.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No receipt file exists for the given id.
    #[error("Receipt not found: {0}")]
    NotFound(String),

    /// Reading or writing a receipt file failed.
    #[error("Receipt I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the object form failed.
    #[error("Receipt serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
