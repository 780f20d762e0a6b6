//! Name-grouped invoice breakdown and its text rendering.
//!
//! Invoice lines are keyed by product identity. For display they are folded
//! by product name: quantities of every product sharing a name are summed,
//! and price, tax rate and excise are taken from the first such product.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::invoice::InvoiceLine;

/// Column header of the report table.
pub const REPORT_HEADER: &str = "Product, Amount, Tax, Akcyza, Netto Price, Netto Value";

/// One report row per distinct product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    /// Summed quantity of all lines with this name.
    pub quantity: u64,
    pub tax_rate: Decimal,
    pub excise: Decimal,
    pub net_price: Decimal,
    /// `net_price * quantity`.
    pub net_value: Decimal,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.name,
            self.quantity,
            format_amount(self.tax_rate),
            format_amount(self.excise),
            format_amount(self.net_price),
            format_amount(self.net_value)
        )
    }
}

/// Snapshot of an invoice: totals plus the grouped rows.
///
/// `Display` renders the canonical text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub number: u64,
    /// Distinct product names.
    pub items: usize,
    /// Total unit count.
    pub products: u64,
    pub gross_total: Decimal,
    pub net_total: Decimal,
    pub tax_total: Decimal,
    pub rows: Vec<ReportRow>,
}

impl InvoiceSummary {
    /// Serialize to pretty-printed JSON. Decimals are written as strings.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for InvoiceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice Number: {}", self.number)?;
        writeln!(f, "{REPORT_HEADER}")?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Total items: {}", self.items)?;
        writeln!(f, "Total Products: {}", self.products)?;
        writeln!(f, "Total Gross Amount: {}", format_amount(self.gross_total))?;
        writeln!(f, "Total Netto Amount: {}", format_amount(self.net_total))?;
        write!(f, "Total Tax Amount: {}", format_amount(self.tax_total))
    }
}

/// Fold lines into one row per product name, sorted by name.
pub(crate) fn group_by_name<'a>(
    lines: impl IntoIterator<Item = &'a InvoiceLine>,
) -> Vec<ReportRow> {
    let mut groups: BTreeMap<&str, ReportRow> = BTreeMap::new();
    for line in lines {
        let product = line.product();
        groups
            .entry(product.name())
            .and_modify(|row| row.quantity += line.quantity())
            .or_insert_with(|| ReportRow {
                name: product.name().to_string(),
                quantity: line.quantity(),
                tax_rate: product.tax_rate(),
                excise: product.excise(),
                net_price: product.net_price(),
                net_value: Decimal::ZERO,
            });
    }

    groups
        .into_values()
        .map(|mut row| {
            row.net_value = row.net_price * Decimal::from(row.quantity);
            row
        })
        .collect()
}

/// Render a decimal normalized, with at least one fractional digit.
///
/// `10.00` becomes `10.0`, `0.010` becomes `0.01`.
pub fn format_amount(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}
