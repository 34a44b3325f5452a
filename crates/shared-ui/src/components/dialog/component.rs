use dioxus::prelude::*;

/// Controlled modal dialog. Renders nothing while `open` is false.
///
/// Clicking the backdrop or the close button fires `on_close`; the parent
/// owns the open flag.
#[component]
pub fn Dialog(
    open: bool,
    #[props(default)] title: String,
    #[props(default)] on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                role: "dialog",
                // keep backdrop clicks from closing when the panel is clicked
                onclick: move |evt| evt.stop_propagation(),
                div { class: "dialog-header",
                    if !title.is_empty() {
                        h3 { class: "dialog-title", "{title}" }
                    }
                    button {
                        class: "dialog-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div { class: "dialog-body", {children} }
            }
        }
    }
}

/// Footer row for dialog action buttons.
#[component]
pub fn DialogActions(children: Element) -> Element {
    rsx! {
        div { class: "dialog-actions", {children} }
    }
}
