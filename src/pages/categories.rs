//! Category screen: the nested tree rendered as indented rows.
//!
//! Editing re-reads the category by id so the dialog starts from the stored
//! record. Deleting a category with children asks for a forced delete.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;

use super::category_form::CategoryEditor;
use crate::components::confirm_dialog::{ConfirmDialog, ConfirmOutcome};
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::Category;
use crate::util::category_tree::{FlatCategory, flatten};
use crate::util::filter::filter_rows;

/// Confirmation text for deleting `row`.
pub(crate) fn delete_prompt(row: &FlatCategory) -> String {
    if row.has_children {
        format!("Delete \"{}\" and all of its subcategories?", row.name)
    } else {
        format!("Delete \"{}\"?", row.name)
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let flat = RwSignal::new(Vec::<FlatCategory>::new());
    let editing = RwSignal::new(None::<Option<Category>>);
    let pending_delete = RwSignal::new(None::<FlatCategory>);

    let tree = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            reload.track();
            async move {
                let rows = api::category_tree(&client).await.map(|roots| flatten(&roots));
                if let Ok(rows) = &rows {
                    flat.set(rows.clone());
                }
                rows
            }
        }
    });

    let on_edit = Callback::new({
        let client = client.clone();
        move |id: i64| {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                if let Ok(category) = api::fetch::<Category, _>(&client, id).await {
                    editing.set(Some(Some(category)));
                }
            });
        }
    });

    let on_editor_close = Callback::new(move |saved: bool| {
        editing.set(None);
        if saved {
            reload.update(|n| *n += 1);
        }
    });

    let on_confirm_close = Callback::new(move |outcome: ConfirmOutcome| {
        let Some(row) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        if outcome == ConfirmOutcome::Cancelled {
            return;
        }
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if api::delete_category(&client, row.id, row.has_children).await.is_ok() {
                client.notices().success(format!("Deleted \"{}\".", row.name));
                reload.update(|n| *n += 1);
            }
        });
    });

    let confirm_message = Signal::derive(move || pending_delete.get().map(|row| delete_prompt(&row)).unwrap_or_default());

    view! {
        <section class="resource-page">
            <div class="resource-page__toolbar">
                <input
                    class="search__input"
                    type="search"
                    placeholder="Filter categories"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| reload.update(|n| *n += 1)>
                    "Refresh"
                </button>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                    "New category"
                </button>
            </div>
            <Suspense fallback=move || view! { <p class="resource-page__loading">"Loading..."</p> }>
                {move || {
                    tree.get()
                        .map(|result| match result {
                            Ok(rows) => {
                                category_table(filter_rows(rows, &search.get(), category_cells), on_edit, pending_delete)
                                    .into_any()
                            }
                            Err(_) => view! { <p class="resource-page__error">"Could not load categories."</p> }.into_any(),
                        })
                }}
            </Suspense>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog message=confirm_message on_close=on_confirm_close/>
            </Show>
            {move || {
                editing
                    .get()
                    .map(|category| {
                        view! { <CategoryEditor category=category rows=flat.get_untracked() on_close=on_editor_close/> }
                    })
            }}
        </section>
    }
}

fn category_cells(row: &FlatCategory) -> Vec<String> {
    vec![row.name.clone(), row.description.clone().unwrap_or_default()]
}

fn category_table(
    rows: Vec<FlatCategory>,
    on_edit: Callback<i64>,
    pending_delete: RwSignal<Option<FlatCategory>>,
) -> impl IntoView {
    view! {
        <table class="data-table data-table--tree">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Parent"</th>
                    <th>"Description"</th>
                    <th>"Order"</th>
                    <th class="data-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let id = row.id;
                        let target = row.clone();
                        view! {
                            <tr class=format!("data-table__row--depth-{}", row.depth.min(4))>
                                <td>{row.id}</td>
                                <td>{row.indented_name()}</td>
                                <td>{row.parent_id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                <td>{row.description.clone().unwrap_or_default()}</td>
                                <td>{row.sort_order}</td>
                                <td class="data-table__actions">
                                    <button class="btn btn--small" on:click=move |_| on_edit.run(id)>
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn--danger btn--small"
                                        on:click=move |_| pending_delete.set(Some(target.clone()))
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
