//! Previous/next controls and page-size picker under list tables.

use leptos::prelude::*;

use crate::util::pager::{PAGE_SIZES, Pager};

#[component]
pub fn PagerBar(pager: RwSignal<Pager>, total: RwSignal<u64>) -> impl IntoView {
    let page_count = move || pager.get().page_count(total.get());

    view! {
        <div class="pager">
            <span class="pager__total">{move || format!("{} records", total.get())}</span>
            <button
                class="btn btn--small"
                disabled=move || pager.get().page <= 1
                on:click=move |_| pager.update(|p| *p = p.prev())
            >
                "Prev"
            </button>
            <span class="pager__position">{move || format!("{} / {}", pager.get().page, page_count())}</span>
            <button
                class="btn btn--small"
                disabled=move || pager.get().page >= page_count()
                on:click=move |_| {
                    let total = total.get_untracked();
                    pager.update(|p| *p = p.next(total));
                }
            >
                "Next"
            </button>
            <select
                class="pager__size"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u64>() {
                        pager.update(|p| *p = p.with_page_size(size));
                    }
                }
            >
                {PAGE_SIZES
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || pager.get().page_size == size>
                                {format!("{size} / page")}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
