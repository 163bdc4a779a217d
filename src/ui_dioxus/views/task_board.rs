use dioxus::prelude::*;

use crate::config::BoardConfig;
use crate::domain::filter::ALL_STATUSES;
use crate::domain::task::TaskStatus;
use crate::services::TaskService;
use crate::ui_dioxus::components::{EditDialog, TaskRow};
use crate::ui_dioxus::state::{BoardState, Notice, Placeholder};

const WARNING_STYLE: &str = "display: flex; justify-content: space-between; padding: 12px; \
                             background: #fef3c7; border: 1px solid #fcd34d; border-radius: 6px; \
                             color: #92400e; margin-bottom: 16px;";
const PLACEHOLDER_STYLE: &str = "text-align: center; padding: 60px; background: white; \
                                 border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);";
const ERROR_STYLE: &str = "display: flex; justify-content: space-between; padding: 12px; \
                           background: #fee2e2; border: 1px solid #fca5a5; border-radius: 6px; \
                           color: #991b1b; margin-bottom: 16px;";

#[component]
pub fn TaskBoard() -> Element {
    // Signals are Copy, so every handler below can capture them directly
    let service = use_context::<TaskService>();
    let service = use_signal(move || service);
    let config = use_context::<BoardConfig>();
    let mut state = use_signal(|| BoardState::load(&service.read()));
    let mut draft = use_signal(String::new);

    let snapshot = state.read();
    let rows = snapshot.rows(&config.lookup_base_url);
    let search = snapshot.filter.search.clone();
    let status_value = snapshot.filter.status.select_value();
    let editing = snapshot.editing.clone();
    let notice = snapshot.notice.as_ref().map(|notice| match notice {
        Notice::Warning(message) => (WARNING_STYLE, message.clone()),
        Notice::Error(message) => (ERROR_STYLE, message.clone()),
    });
    let total = snapshot.tasks.len();
    let shown = snapshot.visible_count();
    let placeholder = snapshot.placeholder();
    let revision = snapshot.revision;
    drop(snapshot);

    rsx! {
        div {
            class: "task-board",
            style: "padding: 20px; max-width: 960px; margin: 0 auto; font-family: system-ui, sans-serif;",

            // Header
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                h1 { style: "font-size: 1.8rem; font-weight: bold;", "📋 Tasks" }
                div {
                    style: "padding: 6px 12px; background: #f3f4f6; border-radius: 6px;",
                    "{shown} / {total} tasks"
                }
            }

            // Add form
            form {
                id: "taskForm",
                style: "display: flex; gap: 10px; margin-bottom: 16px;",
                prevent_default: "onsubmit",
                onsubmit: move |_| {
                    let input = draft();
                    if state.write().submit(&service.read(), &input) {
                        draft.set(String::new());
                    }
                },
                input {
                    id: "taskInput",
                    r#type: "text",
                    style: "flex: 1; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                    placeholder: "New task",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                }
                button {
                    r#type: "submit",
                    style: "padding: 8px 20px; border: none; background: #3b82f6; color: white; border-radius: 6px; cursor: pointer;",
                    "Add"
                }
            }

            // Filters
            div {
                style: "display: flex; gap: 10px; margin-bottom: 16px;",
                input {
                    id: "searchInput",
                    r#type: "search",
                    style: "flex: 1; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                    placeholder: "Search tasks",
                    value: "{search}",
                    oninput: move |e| state.write().set_search(e.value()),
                }
                select {
                    id: "statusFilter",
                    style: "padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                    value: "{status_value}",
                    onchange: move |e| state.write().set_status_filter(&e.value()),
                    option { value: ALL_STATUSES, selected: status_value == ALL_STATUSES, "All" }
                    for status in TaskStatus::ALL {
                        option {
                            value: "{status.as_str()}",
                            selected: status_value == status.as_str(),
                            "{status.label()}"
                        }
                    }
                }
            }

            // Notices
            if let Some((notice_style, message)) = notice {
                div {
                    style: notice_style,
                    span { "{message}" }
                    button {
                        style: "border: none; background: transparent; cursor: pointer;",
                        onclick: move |_| state.write().dismiss_notice(),
                        "✕"
                    }
                }
            }

            // Task list
            if placeholder == Some(Placeholder::NoTasks) {
                div {
                    style: PLACEHOLDER_STYLE,
                    div { style: "font-size: 3rem; margin-bottom: 16px;", "📝" }
                    h3 { style: "font-size: 1.2rem; font-weight: 600; margin-bottom: 8px;", "No tasks yet" }
                    p { style: "color: #6b7280;", "Add your first task to get started" }
                }
            }
            if placeholder == Some(Placeholder::NoMatches) {
                div {
                    class: "no-matches",
                    style: PLACEHOLDER_STYLE,
                    div { style: "font-size: 3rem; margin-bottom: 16px;", "🔍" }
                    h3 { style: "font-size: 1.2rem; font-weight: 600; margin-bottom: 8px;", "No matching tasks" }
                    p { style: "color: #6b7280;", "Change the search text or the status filter" }
                }
            }

            // Rows stay mounted while filtered out
            if total > 0 {
                div {
                    class: "sheet",
                    style: "border-radius: 8px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
                    for (index, row_view) in rows.into_iter().enumerate() {
                        TaskRow {
                            key: "{revision}-{index}",
                            row: row_view,
                            on_status_change: move |(text, status): (String, TaskStatus)| {
                                state.write().change_status(&service.read(), &text, status);
                            },
                            on_edit: move |text: String| state.write().begin_edit(text),
                            on_delete: move |text: String| {
                                state.write().delete(&service.read(), &text);
                            },
                        }
                    }
                }
            }

            if let Some(original) = editing {
                EditDialog {
                    original: original,
                    on_save: move |text: String| {
                        state.write().commit_edit(&service.read(), &text);
                    },
                    on_cancel: move |_| state.write().cancel_edit(),
                }
            }
        }
    }
}
