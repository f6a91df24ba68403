use super::*;
use crate::net::types::{FavoriteSummary, Inventory, ReviewSummary, TodayActivity, WeekActivity};

#[test]
fn dashboard_cards_follow_display_order() {
    let stats = DashboardStats { total_users: 3, active_users: 2, total_books: 120, ..DashboardStats::default() };
    let cards = dashboard_cards(&stats);
    assert_eq!(cards[0], ("Users", 3));
    assert_eq!(cards[1], ("Active users", 2));
    assert_eq!(cards[2], ("Books", 120));
    assert_eq!(cards.len(), 7);
}

#[test]
fn borrow_breakdown_splits_overdue_from_active() {
    let stats = DashboardStats {
        total_borrow_records: 50,
        active_borrows: 12,
        overdue_borrows: 4,
        ..DashboardStats::default()
    };
    assert_eq!(borrow_breakdown(&stats), [("On loan", 8), ("Overdue", 4), ("Returned", 38)]);
}

#[test]
fn borrow_breakdown_tolerates_inconsistent_counters() {
    let stats = DashboardStats {
        total_borrow_records: 5,
        active_borrows: 7,
        overdue_borrows: 9,
        ..DashboardStats::default()
    };
    assert_eq!(borrow_breakdown(&stats), [("On loan", 0), ("Overdue", 7), ("Returned", 0)]);
}

#[test]
fn overview_sections_cover_every_group() {
    let overview = StatisticsOverview {
        today: TodayActivity { borrows: 4, returns: 1, new_users: 2 },
        this_week: WeekActivity { borrows: 30, returns: 25 },
        inventory: Inventory { total_quantity: 200, available_quantity: 150, borrowed_quantity: 50 },
        reviews: ReviewSummary { total: 12, avg_rating: 4.26 },
        favorites: FavoriteSummary { total: 7 },
    };
    let sections = overview_sections(&overview);

    let titles: Vec<&str> = sections.iter().map(|(title, _)| *title).collect();
    assert_eq!(titles, vec!["Today", "This week", "Inventory", "Engagement"]);
    assert_eq!(sections[0].1[2], ("New users", "2".to_owned()));
    assert_eq!(sections[2].1[2], ("On loan", "50".to_owned()));
    assert_eq!(sections[3].1[1], ("Average rating", "4.3".to_owned()));
    assert_eq!(sections[3].1[2], ("Favorites", "7".to_owned()));
}

#[test]
fn negative_stock_is_shown_as_reported() {
    let overview = StatisticsOverview {
        inventory: Inventory { total_quantity: 1, available_quantity: 3, borrowed_quantity: -2 },
        ..StatisticsOverview::default()
    };
    assert_eq!(overview_sections(&overview)[2].1[2].1, "-2");
}

#[test]
fn ranking_rows_are_numbered_from_one() {
    let row = BookRanking {
        book_id: 9,
        book_name: "Dune".to_owned(),
        author: None,
        borrow_count: 17,
        avg_rating: 4.0,
    };
    assert_eq!(ranking_cells(0, &row), ["1", "Dune", "", "17", "4.0"].map(str::to_owned));
}
