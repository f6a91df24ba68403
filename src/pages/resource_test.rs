use super::*;
use crate::net::types::{Book, BorrowRecord, Notification};

#[test]
fn query_carries_page_window_and_search() {
    let pager = Pager { page: 3, page_size: 20 };
    let query = list_query(pager, "  dune ", &[]);
    assert_eq!(query.skip, 40);
    assert_eq!(query.limit, 20);
    assert_eq!(query.search.as_deref(), Some("dune"));
    assert!(query.filters.is_empty());
}

#[test]
fn unselected_filters_are_not_sent() {
    let mut selection = empty_selection::<BorrowRecord>();
    assert_eq!(selection.len(), 2);
    assert!(list_query(Pager::default(), "", &selection).filters.is_empty());

    select_filter(&mut selection, "overdue_only", "true".to_owned());
    let query = list_query(Pager::default(), "", &selection);
    assert_eq!(query.filters, vec![("overdue_only".to_owned(), "true".to_owned())]);
    assert_eq!(query.search, None);
}

#[test]
fn clearing_a_filter_drops_it_again() {
    let mut selection = empty_selection::<Notification>();
    select_filter(&mut selection, "unread_only", "true".to_owned());
    select_filter(&mut selection, "unread_only", String::new());
    assert!(list_query(Pager::default(), "", &selection).filters.is_empty());
}

#[test]
fn unknown_filter_key_is_ignored() {
    let mut selection = empty_selection::<Book>();
    select_filter(&mut selection, "status_filter", "borrowed".to_owned());
    assert!(selection.is_empty());
}
