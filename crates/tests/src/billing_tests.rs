use pretty_assertions::assert_eq;
use shared_types::{unpaid_total, InvoiceStatus};

use crate::common::invoice;

#[test]
fn unpaid_total_sums_only_unpaid_invoices() {
    let invoices = vec![
        invoice("a", 100.0, InvoiceStatus::Unpaid),
        invoice("b", 49.99, InvoiceStatus::Unpaid),
        invoice("c", 500.0, InvoiceStatus::Paid),
    ];
    assert_eq!(format!("{:.2}", unpaid_total(&invoices)), "149.99");
}

#[test]
fn marking_paid_removes_the_invoice_from_the_unpaid_sum() {
    let mut invoices = vec![
        invoice("a", 100.0, InvoiceStatus::Unpaid),
        invoice("b", 50.0, InvoiceStatus::Unpaid),
    ];
    assert_eq!(unpaid_total(&invoices), 150.0);

    // What a mark-paid response looks like after the re-fetch.
    invoices[0].status = InvoiceStatus::Paid;

    assert_eq!(unpaid_total(&invoices), 50.0);
    assert!(!invoices.iter().any(|i| i.invoice_id == "a" && i.is_unpaid()));
}

#[test]
fn all_paid_means_zero_outstanding() {
    let invoices = vec![invoice("a", 100.0, InvoiceStatus::Paid)];
    assert_eq!(unpaid_total(&invoices), 0.0);
}

#[test]
fn status_strings_round_trip_lowercase() {
    assert_eq!(
        serde_json::to_string(&InvoiceStatus::Unpaid).unwrap(),
        "\"unpaid\""
    );
    let back: InvoiceStatus = serde_json::from_str("\"paid\"").unwrap();
    assert_eq!(back, InvoiceStatus::Paid);
}
