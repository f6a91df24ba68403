use super::*;

#[test]
fn default_is_first_page_of_ten() {
    let pager = Pager::default();
    assert_eq!(pager.skip(), 0);
    assert_eq!(pager.limit(), 10);
}

#[test]
fn skip_advances_by_page_size() {
    let pager = Pager { page: 3, page_size: 20 };
    assert_eq!(pager.skip(), 40);
    assert_eq!(pager.limit(), 20);
}

#[test]
fn page_count_rounds_up_and_is_never_zero() {
    let pager = Pager { page: 1, page_size: 10 };
    assert_eq!(pager.page_count(0), 1);
    assert_eq!(pager.page_count(10), 1);
    assert_eq!(pager.page_count(11), 2);
}

#[test]
fn next_and_prev_stay_in_range() {
    let pager = Pager { page: 2, page_size: 10 };
    assert_eq!(pager.next(20).page, 2);
    assert_eq!(pager.next(21).page, 3);
    assert_eq!(pager.prev().page, 1);
    assert_eq!(pager.prev().prev().page, 1);
}

#[test]
fn page_size_change_resets_to_first_page() {
    let pager = Pager { page: 4, page_size: 10 }.with_page_size(50);
    assert_eq!(pager, Pager { page: 1, page_size: 50 });
}
