use dioxus::prelude::*;

use crate::domain::task::TaskStatus;
use crate::ui_dioxus::state::RowView;

const ROW_STYLE: &str = "display: grid; grid-template-columns: 1fr 160px 180px; gap: 12px; \
                         align-items: center; padding: 12px 16px; background: white; \
                         border-bottom: 1px solid #e5e7eb;";

#[component]
pub fn TaskRow(
    row: RowView,
    on_status_change: EventHandler<(String, TaskStatus)>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let status_text = row.task.text.clone();
    let edit_text = row.task.text.clone();
    let delete_text = row.task.text.clone();
    let current = row.task.status;
    let row_style = if row.visible { ROW_STYLE } else { "display: none;" };

    rsx! {
        div {
            class: "task-row",
            style: row_style,

            // Description
            div {
                class: "task-cell",
                a {
                    href: "{row.href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "color: #1d4ed8; text-decoration: none; font-weight: 500;",
                    "{row.task.text}"
                }
            }

            // Status
            div {
                class: "status-cell",
                select {
                    style: "padding: 6px; border: 1px solid #e5e7eb; border-radius: 4px; font-size: 14px;",
                    value: "{current.as_str()}",
                    onchange: move |e| {
                        match e.value().parse::<TaskStatus>() {
                            Ok(status) => on_status_change.call((status_text.clone(), status)),
                            Err(err) => tracing::warn!("{}", err),
                        }
                    },
                    for status in TaskStatus::ALL {
                        option {
                            value: "{status.as_str()}",
                            selected: status == current,
                            "{status.label()}"
                        }
                    }
                }
            }

            // Actions
            div {
                class: "actions-cell",
                style: "display: flex; gap: 8px; justify-content: flex-end;",
                button {
                    class: "edit-button",
                    style: "padding: 6px 14px; border: 1px solid #ddd; background: white; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| on_edit.call(edit_text.clone()),
                    "Edit"
                }
                button {
                    class: "delete-button",
                    style: "padding: 6px 14px; border: none; background: #dc2626; color: white; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| on_delete.call(delete_text.clone()),
                    "Delete"
                }
            }
        }
    }
}
