//! Create/edit dialog for categories.

#[cfg(test)]
#[path = "category_form_test.rs"]
mod category_form_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{Category, CategoryDraft};
use crate::state::notices::NoticeLevel;
use crate::util::category_tree::{FlatCategory, subtree_ids};

/// Parent id the backend reads as "move to top level" on update.
const TOP_LEVEL: i64 = 0;

/// Category fields as typed into the dialog. `parent_id` is the selected
/// option value, empty for a top-level category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CategoryForm {
    pub name: String,
    pub description: String,
    pub parent_id: String,
    pub sort_order: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            parent_id: category.parent_id.map(|id| id.to_string()).unwrap_or_default(),
            sort_order: category.sort_order.to_string(),
        }
    }
}

/// Rows that may be chosen as the parent of `editing_id`: everything except
/// the category itself and its descendants.
pub(crate) fn parent_choices(rows: &[FlatCategory], editing_id: Option<i64>) -> Vec<FlatCategory> {
    let excluded = editing_id.map(|id| subtree_ids(rows, id)).unwrap_or_default();
    rows.iter().filter(|row| !excluded.contains(&row.id)).cloned().collect()
}

/// Trimmed draft, or the message to show next to the form. Clearing the
/// parent of an existing category sends the top-level marker.
pub(crate) fn validate_category(
    form: &CategoryForm,
    editing_id: Option<i64>,
    rows: &[FlatCategory],
) -> Result<CategoryDraft, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Enter a category name.");
    }
    let parent_id = match form.parent_id.trim() {
        "" => editing_id.map(|_| TOP_LEVEL),
        raw => {
            let id = raw.parse::<i64>().map_err(|_| "Pick a parent category.")?;
            if let Some(own) = editing_id {
                if subtree_ids(rows, own).contains(&id) {
                    return Err("A category cannot be moved under itself.");
                }
            }
            Some(id)
        }
    };
    let sort_order = match form.sort_order.trim() {
        "" => 0,
        raw => raw.parse::<i64>().map_err(|_| "Sort order must be a whole number.")?,
    };
    let description = form.description.trim();
    Ok(CategoryDraft {
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        parent_id,
        sort_order,
    })
}

#[component]
pub fn CategoryEditor(category: Option<Category>, rows: Vec<FlatCategory>, on_close: Callback<bool>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let editing_id = category.as_ref().map(|c| c.id);
    let form = RwSignal::new(category.as_ref().map(CategoryForm::from_category).unwrap_or_default());
    let busy = RwSignal::new(false);
    let choices = parent_choices(&rows, editing_id);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let draft = match validate_category(&form.get_untracked(), editing_id, &rows) {
            Ok(draft) => draft,
            Err(message) => {
                client.notices().push(NoticeLevel::Warning, message);
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let saved = match editing_id {
                Some(id) => api::update_category(&client, id, &draft).await,
                None => api::create_category(&client, &draft).await,
            };
            busy.set(false);
            if let Ok(category) = saved {
                client.notices().success(format!("Saved \"{}\".", category.name));
                on_close.run(true);
            }
        });
    });

    let field = move |label: &'static str, kind: &'static str, get: fn(&CategoryForm) -> String, set: fn(&mut CategoryForm, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(false)>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing_id.is_some() { "Edit Category" } else { "New Category" }}</h2>
                {field("Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field("Description", "text", |f| f.description.clone(), |f, v| f.description = v)}
                <label class="dialog__label">
                    "Parent"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.parent_id.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.parent_id = value);
                        }
                    >
                        <option value="">"(top level)"</option>
                        {choices
                            .into_iter()
                            .map(|row| view! { <option value=row.id.to_string()>{row.indented_name()}</option> })
                            .collect_view()}
                    </select>
                </label>
                {field("Sort order", "number", |f| f.sort_order.clone(), |f, v| f.sort_order = v)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(false)>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
