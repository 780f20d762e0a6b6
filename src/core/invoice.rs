use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;

use super::error::InvoiceError;
use super::numbering::InvoiceNumbering;
use super::product::{Product, ProductId};
use super::report::{self, InvoiceSummary, ReportRow};

/// Largest quantity accepted for a single line.
pub const MAX_QUANTITY: i64 = i32::MAX as i64;

/// A product and the quantity sold of it.
#[derive(Debug, Clone)]
pub struct InvoiceLine {
    product: Product,
    quantity: u64,
}

impl InvoiceLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn net_value(&self) -> Decimal {
        self.product.net_price() * Decimal::from(self.quantity)
    }

    pub fn gross_value(&self) -> Decimal {
        self.product.gross_price() * Decimal::from(self.quantity)
    }
}

/// A sales invoice.
///
/// Lines are keyed by product identity: adding the same [`Product`] again
/// replaces its quantity, while a separately built product with the same
/// name gets its own line. The text report groups lines by name.
///
/// ```
/// use rachunek::core::*;
/// use rust_decimal_macros::dec;
///
/// let mut invoice = Invoice::new();
/// invoice.add_product(&Product::dairy("Kefir", dec!(100)).unwrap()).unwrap();
/// invoice
///     .add_product_quantity(&Product::other("Pinezka", dec!(0.01)).unwrap(), 1000)
///     .unwrap();
///
/// assert_eq!(invoice.net_total(), dec!(110.00));
/// assert_eq!(invoice.gross_total(), dec!(120.30));
/// assert_eq!(invoice.tax_total(), dec!(10.30));
/// assert_eq!(invoice.total_products_number(), 1001);
/// ```
///
/// Not `Clone`: a copy would share the invoice number.
#[derive(Debug)]
pub struct Invoice {
    number: u64,
    lines: BTreeMap<ProductId, InvoiceLine>,
}

impl Invoice {
    /// Create an empty invoice numbered from the process-wide sequence.
    pub fn new() -> Self {
        Self::with_numbering(InvoiceNumbering::global())
    }

    /// Create an empty invoice numbered from `numbering`.
    pub fn with_numbering(numbering: &InvoiceNumbering) -> Self {
        let number = numbering.next_number();
        tracing::trace!(invoice = number, "invoice created");
        Self {
            number,
            lines: BTreeMap::new(),
        }
    }

    /// The number assigned at creation. Always positive.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Add one unit of `product`.
    pub fn add_product(&mut self, product: &Product) -> Result<(), InvoiceError> {
        self.add_optional_product(Some(product), 1)
    }

    /// Set the quantity of `product` on this invoice.
    pub fn add_product_quantity(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<(), InvoiceError> {
        self.add_optional_product(Some(product), quantity)
    }

    /// Set the quantity of a product that may be missing, e.g. the result of
    /// a catalog lookup.
    ///
    /// Rejects a missing product, a quantity outside `1..=MAX_QUANTITY`, and
    /// a line that would push the totals past the `Decimal` range. On error
    /// the invoice is unchanged. Otherwise the quantity replaces whatever was
    /// recorded for the same product identity.
    pub fn add_optional_product(
        &mut self,
        product: Option<&Product>,
        quantity: i64,
    ) -> Result<(), InvoiceError> {
        let result = self.check_line(product, quantity);
        let (product, quantity) = match result {
            Ok(line) => line,
            Err(err) => {
                tracing::debug!(invoice = self.number, error = %err, "line rejected");
                return Err(err);
            }
        };

        let line = InvoiceLine {
            product: product.clone(),
            quantity,
        };
        match self.lines.insert(product.id(), line) {
            Some(previous) => tracing::debug!(
                invoice = self.number,
                product = product.name(),
                previous = previous.quantity,
                quantity,
                "line quantity replaced"
            ),
            None => tracing::debug!(
                invoice = self.number,
                product = product.name(),
                quantity,
                "line added"
            ),
        }
        Ok(())
    }

    fn check_line<'p>(
        &self,
        product: Option<&'p Product>,
        quantity: i64,
    ) -> Result<(&'p Product, u64), InvoiceError> {
        let product = product.ok_or_else(|| InvoiceError::invalid("product is required"))?;
        if quantity <= 0 {
            return Err(InvoiceError::invalid(format!(
                "quantity of {:?} must be positive, got {quantity}",
                product.name()
            )));
        }
        if quantity > MAX_QUANTITY {
            return Err(InvoiceError::invalid(format!(
                "quantity of {:?} exceeds {MAX_QUANTITY}",
                product.name()
            )));
        }
        let quantity = quantity.unsigned_abs();
        // gross >= net for every line, so a representable gross total bounds the net one
        let total = product
            .gross_price()
            .checked_mul(Decimal::from(quantity))
            .and_then(|line_gross| {
                self.lines
                    .values()
                    .filter(|line| line.product.id() != product.id())
                    .try_fold(line_gross, |acc, line| acc.checked_add(line.gross_value()))
            });
        if total.is_none() {
            return Err(InvoiceError::invalid(format!(
                "{quantity} x {:?} exceeds the representable invoice total",
                product.name()
            )));
        }
        Ok((product, quantity))
    }

    /// Drop the line for `product`, returning its quantity if it was present.
    pub fn remove_product(&mut self, product: &Product) -> Option<u64> {
        let removed = self.lines.remove(&product.id())?;
        tracing::debug!(
            invoice = self.number,
            product = product.name(),
            quantity = removed.quantity,
            "line removed"
        );
        Some(removed.quantity)
    }

    /// Lines in product creation order.
    pub fn lines(&self) -> impl Iterator<Item = &InvoiceLine> {
        self.lines.values()
    }

    /// Quantity recorded for this exact product identity.
    pub fn quantity_of(&self, product: &Product) -> Option<u64> {
        self.lines.get(&product.id()).map(InvoiceLine::quantity)
    }

    /// Number of distinct product identities.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `net price * quantity`.
    pub fn net_total(&self) -> Decimal {
        self.lines().map(InvoiceLine::net_value).sum()
    }

    /// Sum of `gross price * quantity`, excise included.
    pub fn gross_total(&self) -> Decimal {
        self.lines().map(InvoiceLine::gross_value).sum()
    }

    /// `gross_total - net_total`.
    pub fn tax_total(&self) -> Decimal {
        self.gross_total() - self.net_total()
    }

    /// Total unit count over all lines.
    pub fn total_products_number(&self) -> u64 {
        self.lines().map(InvoiceLine::quantity).sum()
    }

    /// Number of distinct product names.
    pub fn items_count(&self) -> usize {
        self.report_rows().len()
    }

    /// Lines grouped by product name, sorted by name.
    pub fn report_rows(&self) -> Vec<ReportRow> {
        report::group_by_name(self.lines())
    }

    pub fn summary(&self) -> InvoiceSummary {
        let rows = self.report_rows();
        InvoiceSummary {
            number: self.number,
            items: rows.len(),
            products: self.total_products_number(),
            gross_total: self.gross_total(),
            net_total: self.net_total(),
            tax_total: self.tax_total(),
            rows,
        }
    }

    /// Render the text report.
    pub fn print(&self) -> String {
        self.summary().to_string()
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}
