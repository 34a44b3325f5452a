use shared_types::{CreditAdjust, CreditTransaction, Invoice, InvoiceCreate};

use crate::http;
use crate::ApiResult;

/// `GET /invoices`. Admins see every invoice, students only their own.
pub async fn list_invoices() -> ApiResult<Vec<Invoice>> {
    http::get_json("/invoices").await
}

pub async fn create_invoice(req: &InvoiceCreate) -> ApiResult<Invoice> {
    http::post_json("/invoices", req).await
}

pub async fn mark_invoice_paid(invoice_id: &str) -> ApiResult<serde_json::Value> {
    http::patch_json(
        &format!("/invoices/{invoice_id}"),
        &serde_json::json!({ "status": "paid" }),
    )
    .await
}

pub async fn delete_invoice(invoice_id: &str) -> ApiResult<()> {
    http::delete(&format!("/invoices/{invoice_id}")).await
}

/// The caller's own credit ledger.
pub async fn my_credits() -> ApiResult<Vec<CreditTransaction>> {
    http::get_json("/credits").await
}

/// A student's ledger as seen by an admin.
pub async fn student_credits(student_id: &str) -> ApiResult<Vec<CreditTransaction>> {
    http::get_json(&format!("/students/{student_id}/credits")).await
}

/// Signed adjustment to a student's balance. Negative amounts deduct.
pub async fn adjust_credits(student_id: &str, req: &CreditAdjust) -> ApiResult<CreditTransaction> {
    http::post_json(&format!("/students/{student_id}/credits"), req).await
}
