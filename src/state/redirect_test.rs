use super::*;

#[test]
fn new_redirector_has_nothing_pending() {
    assert!(Redirector::new().pending_untracked().is_none());
}

#[test]
fn take_returns_latest_request_once() {
    let redirect = Redirector::new();
    redirect.request("/books");
    redirect.request("/login");
    assert_eq!(redirect.take().as_deref(), Some("/login"));
    assert!(redirect.take().is_none());
    assert!(redirect.pending_untracked().is_none());
}
