//! Dashboard counters, the activity overview and the borrow ranking.

#[cfg(test)]
#[path = "statistics_test.rs"]
mod statistics_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{BookRanking, DashboardStats, StatisticsOverview};

/// Titles listed in the borrow ranking.
const RANKING_SIZE: u32 = 10;

/// Label/value pairs shown as cards, in display order.
pub(crate) fn dashboard_cards(stats: &DashboardStats) -> Vec<(&'static str, u64)> {
    vec![
        ("Users", stats.total_users),
        ("Active users", stats.active_users),
        ("Books", stats.total_books),
        ("Categories", stats.total_categories),
        ("Borrows", stats.total_borrow_records),
        ("Reservations", stats.total_reservations),
        ("Pending reservations", stats.pending_reservations),
    ]
}

/// Active, overdue and returned borrow counts. Overdue loans are a subset of
/// active ones on the backend, so they are split out here.
pub(crate) fn borrow_breakdown(stats: &DashboardStats) -> [(&'static str, u64); 3] {
    let overdue = stats.overdue_borrows.min(stats.active_borrows);
    let on_time = stats.active_borrows - overdue;
    let returned = stats.total_borrow_records.saturating_sub(stats.active_borrows);
    [("On loan", on_time), ("Overdue", overdue), ("Returned", returned)]
}

/// Titled card groups for the activity overview.
pub(crate) fn overview_sections(overview: &StatisticsOverview) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
    let StatisticsOverview { today, this_week, inventory, reviews, favorites } = overview;
    vec![
        (
            "Today",
            vec![
                ("Borrows", today.borrows.to_string()),
                ("Returns", today.returns.to_string()),
                ("New users", today.new_users.to_string()),
            ],
        ),
        (
            "This week",
            vec![("Borrows", this_week.borrows.to_string()), ("Returns", this_week.returns.to_string())],
        ),
        (
            "Inventory",
            vec![
                ("Copies", inventory.total_quantity.to_string()),
                ("Available", inventory.available_quantity.to_string()),
                ("On loan", inventory.borrowed_quantity.to_string()),
            ],
        ),
        (
            "Engagement",
            vec![
                ("Reviews", reviews.total.to_string()),
                ("Average rating", format!("{:.1}", reviews.avg_rating)),
                ("Favorites", favorites.total.to_string()),
            ],
        ),
    ]
}

/// Table cells for one ranking row, 1-based position first.
pub(crate) fn ranking_cells(position: usize, row: &BookRanking) -> [String; 5] {
    [
        (position + 1).to_string(),
        row.book_name.clone(),
        row.author.clone().unwrap_or_default(),
        row.borrow_count.to_string(),
        format!("{:.1}", row.avg_rating),
    ]
}

/// Counter cards fetched from `/stats/dashboard`.
#[component]
pub fn StatCards(#[prop(optional)] with_breakdown: bool) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let dashboard = LocalResource::new(move || {
        let client = client.clone();
        async move { api::dashboard_stats(&client).await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="stats__loading">"Loading statistics..."</p> }>
            {move || {
                dashboard
                    .get()
                    .map(|result| match result {
                        Ok(stats) => {
                            view! {
                                <div class="stats">
                                    <div class="stats__cards">
                                        {dashboard_cards(&stats)
                                            .into_iter()
                                            .map(|(label, value)| stat_card(label, value.to_string()))
                                            .collect_view()}
                                    </div>
                                    {with_breakdown
                                        .then(|| {
                                            view! {
                                                <h3 class="stats__heading">"Borrow status"</h3>
                                                <div class="stats__cards">
                                                    {borrow_breakdown(&stats)
                                                        .into_iter()
                                                        .map(|(label, value)| stat_card(label, value.to_string()))
                                                        .collect_view()}
                                                </div>
                                            }
                                        })}
                                </div>
                            }
                                .into_any()
                        }
                        Err(_) => view! { <p class="stats__error">"Statistics unavailable."</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

#[component]
fn ActivityOverview() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let overview = LocalResource::new(move || {
        let client = client.clone();
        async move { api::statistics_overview(&client).await }
    });

    view! {
        <Suspense fallback=|| ()>
            {move || {
                overview
                    .get()
                    .map(|result| match result {
                        Ok(overview) => {
                            overview_sections(&overview)
                                .into_iter()
                                .map(|(title, cards)| {
                                    view! {
                                        <h3 class="stats__heading">{title}</h3>
                                        <div class="stats__cards">
                                            {cards
                                                .into_iter()
                                                .map(|(label, value)| stat_card(label, value))
                                                .collect_view()}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                        Err(_) => view! { <p class="stats__error">"Activity overview unavailable."</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

#[component]
fn BorrowRanking() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let ranking = LocalResource::new(move || {
        let client = client.clone();
        async move { api::borrow_ranking(&client, RANKING_SIZE).await }
    });

    view! {
        <h3 class="stats__heading">"Most borrowed"</h3>
        <Suspense fallback=|| ()>
            {move || {
                ranking
                    .get()
                    .map(|result| match result {
                        Ok(rows) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"#"</th>
                                            <th>"Title"</th>
                                            <th>"Author"</th>
                                            <th>"Borrows"</th>
                                            <th>"Rating"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .iter()
                                            .enumerate()
                                            .map(|(position, row)| {
                                                view! {
                                                    <tr>
                                                        {ranking_cells(position, row)
                                                            .into_iter()
                                                            .map(|cell| view! { <td>{cell}</td> })
                                                            .collect_view()}
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(_) => view! { <p class="stats__error">"Ranking unavailable."</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

fn stat_card(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

#[component]
pub fn StatisticsPage() -> impl IntoView {
    view! {
        <section class="statistics-page">
            <StatCards with_breakdown=true/>
            <ActivityOverview/>
            <BorrowRanking/>
        </section>
    }
}
