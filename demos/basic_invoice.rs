use rachunek::core::*;
use rust_decimal_macros::dec;

fn main() -> Result<(), InvoiceError> {
    let mut invoice = Invoice::new();

    invoice.add_product_quantity(&Product::bottle_of_wine("Merlot", dec!(20.00))?, 10)?;
    invoice.add_product_quantity(&Product::fuel_canister("Oil", dec!(5.5))?, 10)?;
    invoice.add_product_quantity(&Product::dairy("Chedar", dec!(10))?, 7)?;
    invoice.add_product_quantity(&Product::tax_free("Chleb", dec!(5))?, 3)?;
    invoice.add_product_quantity(&Product::other("Pinezka", dec!(0.01))?, 1000)?;

    // same name, new product: its own line, merged in the report
    invoice.add_product_quantity(&Product::tax_free("Chleb", dec!(5))?, 2)?;

    println!("{}", invoice.print());
    println!("---");
    println!("Net:   {}", invoice.net_total());
    println!("Tax:   {}", invoice.tax_total());
    println!("Gross: {}", invoice.gross_total());
    Ok(())
}
