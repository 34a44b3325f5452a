use dioxus::prelude::*;
use shared_types::NoteCreate;
use shared_ui::{
    use_toasts, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Skeleton,
    Textarea,
};

use super::{NeedsClassNotice, TeacherData};
use crate::format_helpers::format_date_human;
use crate::routes::dashboard::{fetch_list, loaded};

/// Lesson notes for the selected class.
#[component]
pub fn TeacherNotes() -> Element {
    let data: TeacherData = use_context();
    let toasts = use_toasts();

    let mut session_date = use_signal(String::new);
    let mut content = use_signal(String::new);

    let selected = data.selected_class;
    let mut notes = use_resource(move || {
        let class_id = selected();
        fetch_list("lesson notes", async move {
            match class_id {
                Some(id) => api_client::classwork::list_notes(&id).await,
                None => Ok(Vec::new()),
            }
        })
    });

    let has_class = selected().is_some();

    let create_note = move |_| {
        let class_id = match selected.peek().clone() {
            Some(id) => id,
            None => return,
        };
        if session_date().is_empty() || content().trim().is_empty() {
            toasts.error("Date and note text are required");
            return;
        }
        let req = NoteCreate {
            session_date: session_date(),
            content: content().trim().to_string(),
        };
        spawn(async move {
            match api_client::classwork::create_note(&class_id, &req).await {
                Ok(_) => {
                    toasts.success("Note saved");
                    content.set(String::new());
                    notes.restart();
                }
                Err(err) => {
                    tracing::error!("note create failed: {}", err);
                    toasts.error("Failed to save note");
                }
            }
        });
    };

    let delete_note = move |note_id: String| {
        let class_id = match selected.peek().clone() {
            Some(id) => id,
            None => return,
        };
        spawn(async move {
            match api_client::classwork::delete_note(&class_id, &note_id).await {
                Ok(_) => {
                    toasts.success("Note removed");
                    notes.restart();
                }
                Err(err) => {
                    tracing::error!("note delete failed: {}", err);
                    toasts.error("Failed to remove note");
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "New lesson note" }
            }
            CardContent {
                Input {
                    label: "Session date",
                    input_type: "date",
                    value: session_date(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| session_date.set(evt.value()),
                }
                Textarea {
                    label: "Note",
                    value: content(),
                    disabled: !has_class,
                    on_input: move |evt: FormEvent| content.set(evt.value()),
                }
                Button { disabled: !has_class, onclick: create_note, "Save" }
            }
        }
        if !has_class {
            NeedsClassNotice {}
        } else {
            Card {
                CardHeader {
                    CardTitle { "Notes" }
                }
                CardContent {
                    match loaded(notes) {
                        None => rsx! { Skeleton { style: "height: 8rem; width: 100%;" } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No notes yet." }
                        },
                        Some(list) => rsx! {
                            ul { class: "note-list",
                                for note in list {
                                    li { key: "{note.note_id}",
                                        div { class: "note-main",
                                            span { class: "note-date",
                                                {format_date_human(&note.session_date)}
                                            }
                                            p { class: "note-content", "{note.content}" }
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let id = note.note_id.clone();
                                                move |_| delete_note(id.clone())
                                            },
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
