use dioxus::prelude::*;
use dioxus::events::Key;

/// In-app replacement for the browser `prompt()`: asks for new task text.
/// Cancel, backdrop click and Escape all abort.
#[component]
pub fn EditDialog(
    original: String,
    on_save: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| original.clone());

    rsx! {
        // Modal backdrop
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "edit-dialog",
                style: "background: white; border-radius: 12px; padding: 24px;
                       width: 90%; max-width: 420px;
                       box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                h3 {
                    style: "margin: 0 0 12px 0; font-size: 20px; font-weight: 600;",
                    "Edit task"
                }

                input {
                    r#type: "text",
                    style: "width: 100%; padding: 8px 12px; border: 1px solid #e5e7eb;
                           border-radius: 6px; margin-bottom: 20px; box-sizing: border-box;",
                    value: "{draft}",
                    autofocus: true,
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            on_save.call(draft());
                        } else if e.key() == Key::Escape {
                            on_cancel.call(());
                        }
                    },
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px;",

                    button {
                        style: "padding: 8px 20px; border: 1px solid #ddd;
                               background: white; color: #333; border-radius: 4px;
                               cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        style: "padding: 8px 20px; border: none;
                               background: #3b82f6; color: white; border-radius: 4px;
                               cursor: pointer; font-size: 14px;",
                        disabled: draft.read().trim().is_empty(),
                        onclick: move |_| on_save.call(draft()),
                        "Save"
                    }
                }
            }
        }
    }
}
