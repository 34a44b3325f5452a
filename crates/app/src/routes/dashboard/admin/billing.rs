use dioxus::prelude::*;
use shared_types::{credit_balance, unpaid_total, CreditAdjust, InvoiceCreate, UserRole};
use shared_ui::{
    use_toasts, Button, ButtonVariant, Card, CardAction, CardContent, CardDescription, CardHeader,
    CardTitle, Dialog, DialogActions, FormSelect, Input, Skeleton,
};

use super::AdminData;
use crate::format_helpers::{format_date_human, format_money};
use crate::routes::dashboard::{fetch_list, loaded};

/// Invoices and per-student credit ledgers.
#[component]
pub fn AdminBilling() -> Element {
    let data: AdminData = use_context();
    let toasts = use_toasts();

    let mut show_create = use_signal(|| false);
    let mut inv_student = use_signal(String::new);
    let mut inv_amount = use_signal(String::new);
    let mut inv_description = use_signal(String::new);
    let mut inv_due = use_signal(String::new);

    let mut credit_student = use_signal(String::new);
    let mut credit_amount = use_signal(String::new);
    let mut credit_note = use_signal(String::new);

    let mut credits = use_resource(move || {
        let student_id = credit_student();
        fetch_list("credit history", async move {
            if student_id.is_empty() {
                return Ok(Vec::new());
            }
            api_client::billing::student_credits(&student_id).await
        })
    });

    let (invoice_list, user_list) = match (loaded(data.invoices), loaded(data.users)) {
        (Some(i), Some(u)) => (i, u),
        _ => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 12rem; width: 100%;" } } }
            };
        }
    };

    let students: Vec<_> = user_list
        .into_iter()
        .filter(|u| u.role == UserRole::Student)
        .collect();
    let outstanding = unpaid_total(&invoice_list);

    let create_invoice = move |_| {
        let amount: f64 = match inv_amount().parse() {
            Ok(a) => a,
            Err(_) => {
                toasts.error("Amount must be a number");
                return;
            }
        };
        if inv_student().is_empty() || inv_due().is_empty() {
            toasts.error("Pick a student and a due date");
            return;
        }
        let req = InvoiceCreate {
            student_id: inv_student(),
            amount,
            description: inv_description(),
            due_date: inv_due(),
        };
        spawn(async move {
            let mut invoices = data.invoices;
            match api_client::billing::create_invoice(&req).await {
                Ok(_) => {
                    toasts.success("Invoice created");
                    show_create.set(false);
                    inv_amount.set(String::new());
                    inv_description.set(String::new());
                    inv_due.set(String::new());
                    invoices.restart();
                }
                Err(err) => {
                    tracing::error!("invoice create failed: {}", err);
                    toasts.error("Failed to create invoice");
                }
            }
        });
    };

    let mark_paid = move |invoice_id: String| {
        spawn(async move {
            let mut invoices = data.invoices;
            match api_client::billing::mark_invoice_paid(&invoice_id).await {
                Ok(_) => {
                    toasts.success("Invoice marked paid");
                    invoices.restart();
                }
                Err(err) => {
                    tracing::error!("mark paid failed: {}", err);
                    toasts.error("Failed to mark invoice paid");
                }
            }
        });
    };

    let delete_invoice = move |invoice_id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this invoice?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn(async move {
            let mut invoices = data.invoices;
            match api_client::billing::delete_invoice(&invoice_id).await {
                Ok(_) => {
                    toasts.success("Invoice deleted");
                    invoices.restart();
                }
                Err(err) => {
                    tracing::error!("invoice delete failed: {}", err);
                    toasts.error("Failed to delete invoice");
                }
            }
        });
    };

    let adjust_credits = move |_| {
        let amount: f64 = match credit_amount().parse() {
            Ok(a) => a,
            Err(_) => {
                toasts.error("Amount must be a number");
                return;
            }
        };
        let student_id = credit_student();
        if student_id.is_empty() {
            toasts.error("Pick a student first");
            return;
        }
        let req = CreditAdjust {
            amount,
            note: credit_note(),
        };
        spawn(async move {
            match api_client::billing::adjust_credits(&student_id, &req).await {
                Ok(_) => {
                    toasts.success("Credits adjusted");
                    credit_amount.set(String::new());
                    credit_note.set(String::new());
                    credits.restart();
                }
                Err(err) => {
                    tracing::error!("credit adjust failed: {}", err);
                    toasts.error("Failed to adjust credits");
                }
            }
        });
    };

    let ledger = loaded(credits);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Invoices" }
                CardDescription { "Outstanding: {format_money(outstanding)}" }
                CardAction {
                    Button { onclick: move |_| show_create.set(true), "New invoice" }
                }
            }
            CardContent {
                if invoice_list.is_empty() {
                    p { class: "empty-note", "No invoices yet." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Student" }
                                th { "Amount" }
                                th { "Description" }
                                th { "Due" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for invoice in invoice_list {
                                tr { key: "{invoice.invoice_id}",
                                    td { "{invoice.student_id}" }
                                    td { {format_money(invoice.amount)} }
                                    td { "{invoice.description}" }
                                    td { {format_date_human(&invoice.due_date)} }
                                    td {
                                        if invoice.is_unpaid() { "Unpaid" } else { "Paid" }
                                    }
                                    td { class: "row-actions",
                                        if invoice.is_unpaid() {
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: {
                                                    let id = invoice.invoice_id.clone();
                                                    move |_| mark_paid(id.clone())
                                                },
                                                "Mark paid"
                                            }
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let id = invoice.invoice_id.clone();
                                                move |_| delete_invoice(id.clone())
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Card {
            CardHeader {
                CardTitle { "Student credits" }
                CardDescription { "Signed adjustments; negative amounts deduct." }
            }
            CardContent {
                FormSelect {
                    label: "Student",
                    value: credit_student(),
                    onchange: move |evt: Event<FormData>| credit_student.set(evt.value()),
                    option { value: "", "Select a student" }
                    for student in students.iter() {
                        option { key: "{student.user_id}", value: "{student.user_id}", "{student.name}" }
                    }
                }
                if !credit_student().is_empty() {
                    match &ledger {
                        Some(transactions) => rsx! {
                            p { class: "credit-balance",
                                "Balance: "
                                strong { {format_money(credit_balance(transactions))} }
                            }
                            ul { class: "credit-ledger",
                                for tx in transactions.iter() {
                                    li { key: "{tx.tx_id}",
                                        span { {format_money(tx.amount)} }
                                        span { " \u{00b7} {tx.note} \u{00b7} " }
                                        span { {format_date_human(&tx.created_at)} }
                                    }
                                }
                            }
                            div { class: "credit-form",
                                Input {
                                    label: "Amount",
                                    input_type: "number",
                                    value: credit_amount(),
                                    on_input: move |evt: FormEvent| credit_amount.set(evt.value()),
                                }
                                Input {
                                    label: "Note",
                                    value: credit_note(),
                                    on_input: move |evt: FormEvent| credit_note.set(evt.value()),
                                }
                                Button { onclick: adjust_credits, "Apply" }
                            }
                        },
                        None => rsx! { Skeleton { style: "height: 6rem; width: 100%;" } },
                    }
                }
            }
        }
        Dialog {
            open: show_create(),
            title: "New invoice",
            on_close: move |_| show_create.set(false),
            FormSelect {
                label: "Student",
                value: inv_student(),
                onchange: move |evt: Event<FormData>| inv_student.set(evt.value()),
                option { value: "", "Select a student" }
                for student in students.iter() {
                    option { key: "{student.user_id}", value: "{student.user_id}", "{student.name}" }
                }
            }
            Input {
                label: "Amount",
                input_type: "number",
                value: inv_amount(),
                on_input: move |evt: FormEvent| inv_amount.set(evt.value()),
            }
            Input {
                label: "Description",
                value: inv_description(),
                on_input: move |evt: FormEvent| inv_description.set(evt.value()),
            }
            Input {
                label: "Due date",
                input_type: "date",
                value: inv_due(),
                on_input: move |evt: FormEvent| inv_due.set(evt.value()),
            }
            DialogActions {
                Button { variant: ButtonVariant::Ghost, onclick: move |_| show_create.set(false), "Cancel" }
                Button { onclick: create_invoice, "Create" }
            }
        }
    }
}
