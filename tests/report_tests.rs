use rachunek::core::*;
use rust_decimal_macros::dec;

fn invoice() -> Invoice {
    Invoice::with_numbering(&InvoiceNumbering::new())
}

// --- Canonical Text Report ---

#[test]
fn empty_invoice_report() {
    let inv = invoice();
    assert_eq!(
        inv.print(),
        "Invoice Number: 1\n\
         Product, Amount, Tax, Akcyza, Netto Price, Netto Value\n\
         \n\
         \n\
         \n\
         Total items: 0\n\
         Total Products: 0\n\
         Total Gross Amount: 0.0\n\
         Total Netto Amount: 0.0\n\
         Total Tax Amount: 0.0"
    );
}

#[test]
fn rows_are_sorted_by_name() {
    let mut inv = invoice();
    inv.add_product(&Product::tax_free("Warzywa", dec!(10)).unwrap()).unwrap();
    inv.add_product(&Product::tax_free("Owoce", dec!(15)).unwrap()).unwrap();
    assert_eq!(
        inv.print(),
        "Invoice Number: 1\n\
         Product, Amount, Tax, Akcyza, Netto Price, Netto Value\n\
         \n\
         Owoce, 1, 0.0, 0.0, 15.0, 15.0\n\
         Warzywa, 1, 0.0, 0.0, 10.0, 10.0\n\
         \n\
         \n\
         Total items: 2\n\
         Total Products: 2\n\
         Total Gross Amount: 25.0\n\
         Total Netto Amount: 25.0\n\
         Total Tax Amount: 0.0"
    );
}

#[test]
fn many_same_products() {
    let mut inv = invoice();
    inv.add_product_quantity(&Product::tax_free("Warzywa", dec!(10)).unwrap(), 100).unwrap();
    assert_eq!(
        inv.print(),
        "Invoice Number: 1\n\
         Product, Amount, Tax, Akcyza, Netto Price, Netto Value\n\
         \n\
         Warzywa, 100, 0.0, 0.0, 10.0, 1000.0\n\
         \n\
         \n\
         Total items: 1\n\
         Total Products: 100\n\
         Total Gross Amount: 1000.0\n\
         Total Netto Amount: 1000.0\n\
         Total Tax Amount: 0.0"
    );
}

#[test]
fn fractional_price_keeps_its_digits() {
    let mut inv = invoice();
    inv.add_product(&Product::tax_free("Warzywa", dec!(199.99)).unwrap()).unwrap();
    let report = inv.print();
    assert!(report.contains("\nWarzywa, 1, 0.0, 0.0, 199.99, 199.99\n"));
    assert!(report.ends_with(
        "Total Gross Amount: 199.99\nTotal Netto Amount: 199.99\nTotal Tax Amount: 0.0"
    ));
}

#[test]
fn quantities_more_than_one() {
    let mut inv = invoice();
    inv.add_product_quantity(&Product::tax_free("Kubek", dec!(5)).unwrap(), 2).unwrap();
    inv.add_product_quantity(&Product::dairy("Kozi Serek", dec!(10)).unwrap(), 3).unwrap();
    inv.add_product_quantity(&Product::other("Pinezka", dec!(0.01)).unwrap(), 1000).unwrap();
    assert_eq!(
        inv.print(),
        "Invoice Number: 1\n\
         Product, Amount, Tax, Akcyza, Netto Price, Netto Value\n\
         \n\
         Kozi Serek, 3, 0.08, 0.0, 10.0, 30.0\n\
         Kubek, 2, 0.0, 0.0, 5.0, 10.0\n\
         Pinezka, 1000, 0.23, 0.0, 0.01, 10.0\n\
         \n\
         \n\
         Total items: 3\n\
         Total Products: 1005\n\
         Total Gross Amount: 54.7\n\
         Total Netto Amount: 50.0\n\
         Total Tax Amount: 4.7"
    );
}

#[test]
fn doubled_products_are_grouped_by_name() {
    let mut inv = invoice();
    inv.add_product_quantity(&Product::other("Pinezka", dec!(0.01)).unwrap(), 500).unwrap();
    inv.add_product_quantity(&Product::dairy("Chedar", dec!(10)).unwrap(), 7).unwrap();
    inv.add_product_quantity(&Product::tax_free("Chleb", dec!(5)).unwrap(), 3).unwrap();
    inv.add_product_quantity(&Product::dairy("Chedar", dec!(10)).unwrap(), 3).unwrap();
    inv.add_product_quantity(&Product::other("Pinezka", dec!(0.01)).unwrap(), 1000).unwrap();
    inv.add_product_quantity(&Product::tax_free("Chleb", dec!(5)).unwrap(), 2).unwrap();
    assert_eq!(
        inv.print(),
        "Invoice Number: 1\n\
         Product, Amount, Tax, Akcyza, Netto Price, Netto Value\n\
         \n\
         Chedar, 10, 0.08, 0.0, 10.0, 100.0\n\
         Chleb, 5, 0.0, 0.0, 5.0, 25.0\n\
         Pinezka, 1500, 0.23, 0.0, 0.01, 15.0\n\
         \n\
         \n\
         Total items: 3\n\
         Total Products: 1515\n\
         Total Gross Amount: 151.45\n\
         Total Netto Amount: 140.0\n\
         Total Tax Amount: 11.45"
    );
}

#[test]
fn transport_day_fuel_report() {
    let mut inv = invoice();
    inv.add_product_quantity(&Product::fuel_canister_dt("Oil", dec!(5.5)).unwrap(), 10).unwrap();
    assert_eq!(
        inv.print(),
        "Invoice Number: 1\n\
         Product, Amount, Tax, Akcyza, Netto Price, Netto Value\n\
         \n\
         Oil, 10, 0.0, 0.0, 5.5, 55.0\n\
         \n\
         \n\
         Total items: 1\n\
         Total Products: 10\n\
         Total Gross Amount: 55.0\n\
         Total Netto Amount: 55.0\n\
         Total Tax Amount: 0.0"
    );
}

#[test]
fn display_matches_print() {
    let mut inv = invoice();
    inv.add_product(&Product::other("Chipsy", dec!(10)).unwrap()).unwrap();
    assert_eq!(inv.to_string(), inv.print());
}

#[test]
fn identical_contents_print_identically() {
    let numbering = InvoiceNumbering::new();
    let fill = |inv: &mut Invoice| {
        inv.add_product_quantity(&Product::dairy("Kefir", dec!(3.5)).unwrap(), 4).unwrap();
        inv.add_product(&Product::other("Piwko", dec!(10)).unwrap()).unwrap();
    };
    let mut first = Invoice::with_numbering(&numbering);
    let mut second = Invoice::with_numbering(&numbering);
    fill(&mut first);
    fill(&mut second);

    let strip_number = |report: String| report.lines().skip(1).collect::<Vec<_>>().join("\n");
    assert_eq!(strip_number(first.print()), strip_number(second.print()));
    assert_ne!(first.print(), second.print());
}

// --- Structured Summary ---

#[test]
fn summary_matches_totals() {
    let mut inv = invoice();
    inv.add_product_quantity(&Product::fuel_canister("Oil", dec!(5.5)).unwrap(), 10).unwrap();
    inv.add_product(&Product::bottle_of_wine("Champagne", dec!(100)).unwrap()).unwrap();

    let summary = inv.summary();
    assert_eq!(summary.number, 1);
    assert_eq!(summary.items, 2);
    assert_eq!(summary.products, 11);
    assert_eq!(summary.gross_total, dec!(283.16));
    assert_eq!(summary.net_total, dec!(155));
    assert_eq!(summary.tax_total, dec!(128.16));

    let names: Vec<&str> = summary.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Champagne", "Oil"]);
    assert_eq!(summary.rows[1].excise, dec!(5.56));
    assert_eq!(summary.rows[1].net_value, dec!(55.0));
}

#[test]
fn grouped_row_takes_attributes_from_first_product() {
    let mut inv = invoice();
    let first = Product::dairy("Ser", dec!(10)).unwrap();
    let second = Product::other("Ser", dec!(12)).unwrap();
    inv.add_product_quantity(&first, 1).unwrap();
    inv.add_product_quantity(&second, 2).unwrap();

    let rows = inv.report_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 3);
    assert_eq!(rows[0].tax_rate, dec!(0.08));
    assert_eq!(rows[0].net_price, dec!(10));
    assert_eq!(rows[0].net_value, dec!(30));
}

#[cfg(feature = "json")]
#[test]
fn summary_json_uses_string_decimals() {
    let mut inv = invoice();
    inv.add_product(&Product::dairy("Kefir", dec!(100)).unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&inv.summary().to_json().unwrap()).unwrap();
    assert_eq!(json["number"], 1);
    assert_eq!(json["gross_total"], "108.00");
    assert_eq!(json["rows"][0]["name"], "Kefir");
    assert_eq!(json["rows"][0]["tax_rate"], "0.08");
}

// ---------------------------------------------------------------------------
// Snapshot tests (insta)
// ---------------------------------------------------------------------------

#[test]
fn excise_report_snapshot() {
    let mut inv = invoice();
    inv.add_product_quantity(&Product::bottle_of_wine("Merlot", dec!(20.00)).unwrap(), 10).unwrap();
    inv.add_product_quantity(&Product::fuel_canister("Oil", dec!(5.5)).unwrap(), 10).unwrap();
    inv.add_product_quantity(&Product::other("Pinezka", dec!(0.01)).unwrap(), 500).unwrap();
    inv.add_product_quantity(&Product::dairy("Chedar", dec!(10)).unwrap(), 7).unwrap();
    inv.add_product_quantity(&Product::tax_free("Chleb", dec!(5)).unwrap(), 3).unwrap();
    inv.add_product_quantity(&Product::dairy("Chedar", dec!(10)).unwrap(), 3).unwrap();
    inv.add_product_quantity(&Product::other("Pinezka", dec!(0.01)).unwrap(), 1000).unwrap();
    inv.add_product_quantity(&Product::tax_free("Chleb", dec!(5)).unwrap(), 2).unwrap();
    insta::assert_snapshot!("excise_report", inv.print());
}

#[test]
fn mixed_categories_snapshot() {
    let mut inv = invoice();
    inv.add_product(&Product::tax_free("Pampersy", dec!(200)).unwrap()).unwrap();
    inv.add_product(&Product::dairy("Kefir", dec!(100)).unwrap()).unwrap();
    inv.add_product(&Product::other("Piwko", dec!(10)).unwrap()).unwrap();
    insta::assert_snapshot!("mixed_categories_report", inv.print());
}
