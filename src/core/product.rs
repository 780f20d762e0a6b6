use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::InvoiceError;

/// Excise ("akcyza") charged per unit of alcohol and fuel.
pub const EXCISE_AMOUNT: Decimal = dec!(5.56);

static NEXT_PRODUCT_ID: AtomicU64 = AtomicU64::new(1);

/// Fixed tax configuration a product is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    /// 0% tax.
    TaxFree,
    /// 8% reduced rate.
    Dairy,
    /// 23% standard rate.
    Other,
    /// 23% plus excise.
    BottleOfWine,
    /// 80% plus excise.
    FuelCanister,
    /// Fuel sold on the transport day: no tax, no excise.
    FuelCanisterDt,
}

impl ProductCategory {
    /// Every category, in declaration order.
    pub const ALL: [ProductCategory; 6] = [
        Self::TaxFree,
        Self::Dairy,
        Self::Other,
        Self::BottleOfWine,
        Self::FuelCanister,
        Self::FuelCanisterDt,
    ];

    /// Tax rate as a fraction (0.23 for 23%).
    pub fn tax_rate(&self) -> Decimal {
        match self {
            Self::TaxFree => dec!(0),
            Self::Dairy => dec!(0.08),
            Self::Other | Self::BottleOfWine => dec!(0.23),
            Self::FuelCanister => dec!(0.8),
            Self::FuelCanisterDt => dec!(0.0),
        }
    }

    /// Flat per-unit excise.
    pub fn excise(&self) -> Decimal {
        match self {
            Self::BottleOfWine | Self::FuelCanister => EXCISE_AMOUNT,
            Self::FuelCanisterDt => dec!(0.00),
            Self::TaxFree | Self::Dairy | Self::Other => Decimal::ZERO,
        }
    }

    /// Human-readable category name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TaxFree => "tax free",
            Self::Dairy => "dairy",
            Self::Other => "other",
            Self::BottleOfWine => "bottle of wine",
            Self::FuelCanister => "fuel canister",
            Self::FuelCanisterDt => "fuel canister (transport day)",
        }
    }
}

/// Identity of a [`Product`].
///
/// Every constructed product gets a fresh id; clones share it. Invoice lines
/// are keyed by this id, not by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u64);

impl ProductId {
    fn next() -> Self {
        Self(NEXT_PRODUCT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value; increases with construction order.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// An immutable sellable item.
///
/// Equality and hashing follow identity: two products built separately are
/// different even with identical names and prices.
///
/// ```
/// use rachunek::core::*;
/// use rust_decimal_macros::dec;
///
/// let wine = Product::bottle_of_wine("Merlot", dec!(20)).unwrap();
/// assert_eq!(wine.gross_price(), dec!(30.16));
/// assert_ne!(wine, Product::bottle_of_wine("Merlot", dec!(20)).unwrap());
/// assert_eq!(wine, wine.clone());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    #[serde(skip)]
    id: ProductId,
    name: String,
    net_price: Decimal,
    category: ProductCategory,
}

impl Product {
    /// Build a product of the given category.
    ///
    /// Fails if the name is blank, the price is negative, or the gross unit
    /// price would not fit in a `Decimal`.
    pub fn new(
        category: ProductCategory,
        name: impl Into<String>,
        net_price: Decimal,
    ) -> Result<Self, InvoiceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvoiceError::invalid("product name must not be empty"));
        }
        if net_price < Decimal::ZERO {
            return Err(InvoiceError::invalid(format!(
                "net price of {name:?} must not be negative, got {net_price}"
            )));
        }
        let gross = net_price
            .checked_mul(Decimal::ONE + category.tax_rate())
            .and_then(|taxed| taxed.checked_add(category.excise()));
        if gross.is_none() {
            return Err(InvoiceError::invalid(format!(
                "gross price of {name:?} exceeds the decimal range"
            )));
        }
        Ok(Self {
            id: ProductId::next(),
            name,
            net_price,
            category,
        })
    }

    /// 0% tax, no excise.
    pub fn tax_free(name: impl Into<String>, net_price: Decimal) -> Result<Self, InvoiceError> {
        Self::new(ProductCategory::TaxFree, name, net_price)
    }

    /// 8% tax, no excise.
    pub fn dairy(name: impl Into<String>, net_price: Decimal) -> Result<Self, InvoiceError> {
        Self::new(ProductCategory::Dairy, name, net_price)
    }

    /// 23% tax, no excise.
    pub fn other(name: impl Into<String>, net_price: Decimal) -> Result<Self, InvoiceError> {
        Self::new(ProductCategory::Other, name, net_price)
    }

    /// 23% tax plus [`EXCISE_AMOUNT`] per unit.
    pub fn bottle_of_wine(
        name: impl Into<String>,
        net_price: Decimal,
    ) -> Result<Self, InvoiceError> {
        Self::new(ProductCategory::BottleOfWine, name, net_price)
    }

    /// 80% tax plus [`EXCISE_AMOUNT`] per unit.
    pub fn fuel_canister(
        name: impl Into<String>,
        net_price: Decimal,
    ) -> Result<Self, InvoiceError> {
        Self::new(ProductCategory::FuelCanister, name, net_price)
    }

    /// Transport-day fuel: no tax, no excise.
    pub fn fuel_canister_dt(
        name: impl Into<String>,
        net_price: Decimal,
    ) -> Result<Self, InvoiceError> {
        Self::new(ProductCategory::FuelCanisterDt, name, net_price)
    }

    /// Identity used to key invoice lines.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Display name; the report groups lines by it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category fixing the tax rate and excise.
    pub fn category(&self) -> ProductCategory {
        self.category
    }

    /// Pre-tax unit price.
    pub fn net_price(&self) -> Decimal {
        self.net_price
    }

    /// Tax rate of the product's category.
    pub fn tax_rate(&self) -> Decimal {
        self.category.tax_rate()
    }

    /// Per-unit excise of the product's category.
    pub fn excise(&self) -> Decimal {
        self.category.excise()
    }

    /// Tax per unit, excise not included.
    pub fn tax_amount(&self) -> Decimal {
        self.net_price * self.tax_rate()
    }

    /// Unit price including tax and excise: `net * (1 + rate) + excise`.
    pub fn gross_price(&self) -> Decimal {
        self.net_price * (Decimal::ONE + self.tax_rate()) + self.excise()
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
