#![no_main]

use libfuzzer_sys::fuzz_target;
use rachunek::core::*;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    let numbering = InvoiceNumbering::new();
    let mut invoice = Invoice::with_numbering(&numbering);
    let mut products: Vec<Product> = Vec::new();

    // Each 4-byte chunk is one operation: category, name, price, quantity.
    for op in data.chunks_exact(4) {
        let category = ProductCategory::ALL[op[0] as usize % ProductCategory::ALL.len()];
        let quantity = op[3] as i8 as i64;
        let product = if op[1] & 0x80 != 0 && !products.is_empty() {
            // re-add an existing identity
            products[op[1] as usize % products.len()].clone()
        } else {
            let name = format!("P{}", op[1] % 8);
            let price = Decimal::new(i64::from(op[2]) * 7, 2);
            match Product::new(category, name, price) {
                Ok(p) => p,
                Err(_) => continue,
            }
        };

        let before = invoice.total_products_number();
        let previous = invoice.quantity_of(&product).unwrap_or(0);
        match invoice.add_product_quantity(&product, quantity) {
            Ok(()) => assert_eq!(
                invoice.total_products_number(),
                before - previous + quantity as u64
            ),
            Err(_) => assert_eq!(invoice.total_products_number(), before),
        }
        products.push(product);
    }

    assert_eq!(invoice.gross_total() - invoice.net_total(), invoice.tax_total());
    let _ = invoice.print();
});
