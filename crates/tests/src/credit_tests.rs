use pretty_assertions::assert_eq;
use shared_types::{credit_balance, CreditAdjust, CreditTransaction};

fn tx(id: &str, amount: f64) -> CreditTransaction {
    CreditTransaction {
        tx_id: id.to_string(),
        amount,
        note: String::new(),
        created_at: "2026-06-01T00:00:00Z".to_string(),
    }
}

#[test]
fn balance_is_the_signed_sum_of_the_ledger() {
    let ledger = vec![tx("1", 200.0), tx("2", -100.0), tx("3", 25.5)];
    assert_eq!(credit_balance(&ledger), 125.5);
}

#[test]
fn refund_posts_a_signed_number_not_a_string() {
    let req = CreditAdjust {
        amount: -100.0,
        note: "refund".to_string(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert!(value["amount"].is_number());
    assert_eq!(value["amount"].as_f64(), Some(-100.0));
    assert_eq!(value["note"], "refund");
}

#[test]
fn empty_ledger_is_zero() {
    assert_eq!(credit_balance(&[]), 0.0);
}
