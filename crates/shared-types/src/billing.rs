use serde::{Deserialize, Serialize};

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
}

/// An invoice issued to a student, as returned by `GET /invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub student_id: String,
    pub amount: f64,
    pub description: String,
    pub due_date: String,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn is_unpaid(&self) -> bool {
        self.status == InvoiceStatus::Unpaid
    }
}

/// One signed entry in a student's credit ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditTransaction {
    pub tx_id: String,
    pub amount: f64,
    pub note: String,
    pub created_at: String,
}

/// Sum of `amount` over unpaid invoices. Display rounds to 2 decimals.
pub fn unpaid_total(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|i| i.is_unpaid())
        .map(|i| i.amount)
        .sum()
}

/// Running balance of a signed credit ledger.
pub fn credit_balance(transactions: &[CreditTransaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invoice(id: &str, amount: f64, status: InvoiceStatus) -> Invoice {
        Invoice {
            invoice_id: id.into(),
            student_id: "s1".into(),
            amount,
            description: "Tuition".into(),
            due_date: "2025-02-01".into(),
            status,
        }
    }

    #[test]
    fn unpaid_total_sums_only_unpaid() {
        let invoices = vec![
            invoice("i1", 100.0, InvoiceStatus::Unpaid),
            invoice("i2", 49.99, InvoiceStatus::Unpaid),
            invoice("i3", 500.0, InvoiceStatus::Paid),
        ];
        assert_eq!(format!("{:.2}", unpaid_total(&invoices)), "149.99");
    }

    #[test]
    fn marking_paid_removes_from_unpaid_total() {
        let mut invoices = vec![
            invoice("i1", 100.0, InvoiceStatus::Unpaid),
            invoice("i2", 50.0, InvoiceStatus::Unpaid),
        ];
        // The mark-paid mutation re-fetches; simulate the refreshed list.
        invoices[0].status = InvoiceStatus::Paid;
        assert_eq!(unpaid_total(&invoices), 50.0);
        assert!(!invoices[0].is_unpaid());
    }

    #[test]
    fn credit_balance_is_signed() {
        let txs = vec![
            CreditTransaction {
                tx_id: "t1".into(),
                amount: 200.0,
                note: "top-up".into(),
                created_at: "2025-01-01T00:00:00Z".into(),
            },
            CreditTransaction {
                tx_id: "t2".into(),
                amount: -100.0,
                note: "refund".into(),
                created_at: "2025-01-02T00:00:00Z".into(),
            },
        ];
        assert_eq!(credit_balance(&txs), 100.0);
    }

    #[test]
    fn invoice_status_serde_is_lowercase() {
        let status: InvoiceStatus = serde_json::from_str("\"unpaid\"").unwrap();
        assert_eq!(status, InvoiceStatus::Unpaid);
        assert_eq!(serde_json::to_string(&InvoiceStatus::Paid).unwrap(), "\"paid\"");
    }
}
