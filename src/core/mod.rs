//! Core invoice types, product categories, numbering, and reporting.
//!
//! All monetary values are [`rust_decimal::Decimal`] and every product of a
//! price and a quantity is exact.

mod error;
mod invoice;
mod numbering;
mod product;
pub mod report;

pub use error::*;
pub use invoice::*;
pub use numbering::*;
pub use product::*;
pub use report::{InvoiceSummary, ReportRow, format_amount};
