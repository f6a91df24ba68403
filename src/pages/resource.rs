//! Generic paginated list screen shared by every listable entity.
//!
//! ARCHITECTURE
//! ============
//! The page owns pagination, search, filters, row actions and delete
//! orchestration; the entity's `Resource` impl supplies endpoint, columns,
//! filters and cell text. Typing in the search box filters loaded rows
//! immediately; submitting it re-queries the backend with `search`. Entities
//! with a create/edit form pass an `Editor`.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::{ConfirmDialog, ConfirmOutcome};
use crate::components::pager_bar::PagerBar;
use crate::net::api::{self, ListQuery};
use crate::net::gateway::ApiClient;
use crate::net::resource::{Resource, RowAction};
use crate::util::filter::filter_rows;
use crate::util::pager::Pager;

/// Create (`None`) or edit (`Some`) form for one row. The form calls
/// `on_close(true)` after a successful save and `on_close(false)` when
/// dismissed.
pub type Editor<R> = fn(Option<R>, Callback<bool>) -> AnyView;

/// Selected filter values, keyed by query parameter.
pub(crate) type FilterSelection = Vec<(&'static str, String)>;

pub(crate) fn empty_selection<R: Resource>() -> FilterSelection {
    R::FILTERS.iter().map(|f| (f.key, String::new())).collect()
}

/// The backend query for the current page, search text and filter choices.
/// Unselected filters are left out.
pub(crate) fn list_query(pager: Pager, keyword: &str, selection: &[(&'static str, String)]) -> ListQuery {
    selection
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .fold(ListQuery::page(pager.skip(), pager.limit()).search(keyword), |query, (key, value)| {
            query.filter(*key, value.clone())
        })
}

pub(crate) fn select_filter(selection: &mut FilterSelection, key: &str, value: String) {
    if let Some(slot) = selection.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    }
}

pub fn resource_page<R: Resource>(editor: Option<Editor<R>>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let pager = RwSignal::new(Pager::default());
    let search = RwSignal::new(String::new());
    let keyword = RwSignal::new(String::new());
    let selection = RwSignal::new(empty_selection::<R>());
    let reload = RwSignal::new(0u32);
    let total = RwSignal::new(0u64);
    let pending_delete = RwSignal::new(None::<i64>);
    let editing = RwSignal::new(None::<Option<R>>);

    let rows = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let query = selection.with(|chosen| list_query(pager.get(), &keyword.get(), chosen));
            reload.track();
            async move {
                let result = api::list::<R, _>(&client, &query).await;
                if let Ok(list) = &result {
                    total.set(list.total);
                }
                result.map(|list| list.items)
            }
        }
    });

    let on_confirm_close = Callback::new({
        let client = client.clone();
        move |outcome: ConfirmOutcome| {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            if outcome == ConfirmOutcome::Cancelled {
                return;
            }
            let client = client.clone();
            leptos::task::spawn_local(async move {
                if api::delete::<R, _>(&client, id).await.is_ok() {
                    client.notices().success(format!("Deleted {} #{id}.", R::TITLE.to_lowercase()));
                    reload.update(|n| *n += 1);
                }
            });
        }
    });

    let on_action = Callback::new({
        let client = client.clone();
        move |(action, id): (RowAction, i64)| {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                if api::run_action(&client, action, id).await.is_ok() {
                    client.notices().success(action.done());
                    reload.update(|n| *n += 1);
                }
            });
        }
    });

    let on_mark_all_read = move |_| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if api::mark_all_notifications_read(&client).await.is_ok() {
                client.notices().success("All notifications marked as read.");
                reload.update(|n| *n += 1);
            }
        });
    };

    let on_editor_close = Callback::new(move |saved: bool| {
        editing.set(None);
        if saved {
            reload.update(|n| *n += 1);
        }
    });
    let on_edit = editor.map(|_| Callback::new(move |row: R| editing.set(Some(Some(row)))));

    let confirm_message = Signal::derive(move || {
        format!("Delete {} #{}?", R::TITLE.to_lowercase(), pending_delete.get().unwrap_or_default())
    });

    let filter_boxes = R::FILTERS
        .iter()
        .map(|filter| {
            let key = filter.key;
            view! {
                <label class="filter">
                    <span class="filter__label">{filter.label}</span>
                    <select
                        class="filter__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            selection.update(|chosen| select_filter(chosen, key, value));
                            pager.update(|p| p.page = 1);
                        }
                    >
                        <option value="">"Any"</option>
                        {filter
                            .options
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="resource-page">
            <div class="resource-page__toolbar">
                <form
                    class="search"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        pager.update(|p| p.page = 1);
                        keyword.set(search.get_untracked());
                    }
                >
                    <input
                        class="search__input"
                        type="search"
                        placeholder="Search"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
                {filter_boxes}
                <button class="btn" on:click=move |_| reload.update(|n| *n += 1)>
                    "Refresh"
                </button>
                {R::BULK_MARK_READ
                    .then(|| view! { <button class="btn" on:click=on_mark_all_read>"Mark all read"</button> })}
                {editor
                    .map(|_| {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                                "New"
                            </button>
                        }
                    })}
            </div>

            <Suspense fallback=move || view! { <p class="resource-page__loading">"Loading..."</p> }>
                {move || {
                    rows.get()
                        .map(|result| match result {
                            Ok(items) => {
                                let visible = filter_rows(items, &search.get(), R::cells);
                                data_table::<R>(visible, pending_delete, on_action, on_edit).into_any()
                            }
                            Err(_) => view! { <p class="resource-page__error">"Could not load records."</p> }.into_any(),
                        })
                }}
            </Suspense>

            <PagerBar pager=pager total=total/>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog message=confirm_message on_close=on_confirm_close/>
            </Show>
            {move || {
                let open = editor?;
                editing.get().map(|row| open(row, on_editor_close))
            }}
        </section>
    }
}

fn data_table<R: Resource>(
    rows: Vec<R>,
    pending_delete: RwSignal<Option<i64>>,
    on_action: Callback<(RowAction, i64)>,
    on_edit: Option<Callback<R>>,
) -> impl IntoView {
    let with_actions = R::DELETABLE || on_edit.is_some() || rows.iter().any(|row| !row.actions().is_empty());
    let span = (R::COLUMNS.len() + usize::from(with_actions)).to_string();

    let body = if rows.is_empty() {
        view! {
            <tr>
                <td class="data-table__empty" colspan=span>"No records."</td>
            </tr>
        }
            .into_any()
    } else {
        rows.into_iter()
            .map(|row| {
                let id = row.id();
                let actions = row.actions();
                let cells = row.cells();
                view! {
                    <tr>
                        {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                        {with_actions
                            .then(|| {
                                view! {
                                    <td class="data-table__actions">
                                        {actions
                                            .into_iter()
                                            .map(|action| {
                                                let class = if action.is_destructive() {
                                                    "btn btn--danger btn--small"
                                                } else {
                                                    "btn btn--small"
                                                };
                                                view! {
                                                    <button class=class on:click=move |_| on_action.run((action, id))>
                                                        {action.label()}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                        {on_edit
                                            .map(|edit| {
                                                view! {
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| edit.run(row.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                }
                                            })}
                                        {R::DELETABLE
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--danger btn--small"
                                                        on:click=move |_| pending_delete.set(Some(id))
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                }
                            })}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {R::COLUMNS.iter().map(|c| view! { <th data-column=c.key>{c.label}</th> }).collect_view()}
                    {with_actions.then(|| view! { <th class="data-table__actions">"Actions"</th> })}
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
