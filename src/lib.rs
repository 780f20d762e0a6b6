//! # rachunek
//!
//! Sales invoice calculation: products taxed by category (with an optional
//! per-unit excise), invoices collecting them with quantities, exact totals,
//! and a deterministic text report.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use rachunek::core::*;
//! use rust_decimal_macros::dec;
//!
//! let numbering = InvoiceNumbering::new();
//! let mut invoice = Invoice::with_numbering(&numbering);
//! invoice.add_product_quantity(&Product::fuel_canister("Oil", dec!(5.5)).unwrap(), 10).unwrap();
//! invoice.add_product(&Product::bottle_of_wine("Champagne", dec!(100)).unwrap()).unwrap();
//!
//! assert_eq!(invoice.net_total(), dec!(155));
//! assert_eq!(invoice.gross_total(), dec!(283.16));
//! assert_eq!(invoice.tax_total(), dec!(128.16));
//! assert!(invoice.print().starts_with("Invoice Number: 1\n"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Products, invoices, numbering, text report |
//! | `json` | JSON export of [`core::InvoiceSummary`] |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
