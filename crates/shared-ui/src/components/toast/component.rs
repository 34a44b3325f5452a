use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast queue, available anywhere under [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id += 1;

        let mut items = self.items;
        items.write().push(ToastItem { id, kind, message });

        spawn(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            items.write().retain(|t| t.id != id);
        });
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast queue and renders the stacked toast region.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    rsx! {
        {children}
        div { class: "toast-region",
            for item in toasts.items.read().iter().cloned() {
                div {
                    key: "{item.id}",
                    class: "toast",
                    "data-style": item.kind.class(),
                    span { class: "toast-message", "{item.message}" }
                    button {
                        class: "toast-dismiss",
                        aria_label: "Dismiss",
                        onclick: move |_| toasts.dismiss(item.id),
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_maps_to_style_class() {
        assert_eq!(ToastKind::Success.class(), "success");
        assert_eq!(ToastKind::Error.class(), "error");
        assert_eq!(ToastKind::Info.class(), "info");
    }
}
