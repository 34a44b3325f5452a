use dioxus::prelude::*;
use shared_types::{credit_balance, unpaid_total};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};

use super::StudentData;
use crate::format_helpers::{format_date_human, format_money};
use crate::routes::dashboard::loaded;

/// The student's invoices and credit ledger.
#[component]
pub fn StudentBilling() -> Element {
    let data: StudentData = use_context();

    let (invoice_list, ledger) = match (loaded(data.invoices), loaded(data.credits)) {
        (Some(i), Some(c)) => (i, c),
        _ => {
            return rsx! {
                Card { CardContent { Skeleton { style: "height: 12rem; width: 100%;" } } }
            };
        }
    };

    let outstanding = unpaid_total(&invoice_list);
    let balance = credit_balance(&ledger);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Invoices" }
                CardDescription { "Outstanding: {format_money(outstanding)}" }
            }
            CardContent {
                if invoice_list.is_empty() {
                    p { class: "empty-note", "No invoices." }
                } else {
                    ul { class: "invoice-list",
                        for invoice in invoice_list {
                            li { key: "{invoice.invoice_id}",
                                span { class: "invoice-desc", "{invoice.description}" }
                                span { class: "invoice-meta",
                                    {format_money(invoice.amount)}
                                    " \u{00b7} due "
                                    {format_date_human(&invoice.due_date)}
                                }
                                if invoice.is_unpaid() {
                                    Badge { variant: BadgeVariant::Destructive, "Unpaid" }
                                } else {
                                    Badge { variant: BadgeVariant::Secondary, "Paid" }
                                }
                            }
                        }
                    }
                }
            }
        }
        Card {
            CardHeader {
                CardTitle { "Credits" }
                CardDescription { "Balance: {format_money(balance)}" }
            }
            CardContent {
                if ledger.is_empty() {
                    p { class: "empty-note", "No credit activity." }
                } else {
                    ul { class: "credit-ledger",
                        for tx in ledger {
                            li { key: "{tx.tx_id}",
                                span { {format_money(tx.amount)} }
                                span { " \u{00b7} {tx.note} \u{00b7} " }
                                span { {format_date_human(&tx.created_at)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
