//! Static route table and the sidebar menu derived from it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// One console screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub path: &'static str,
    pub title: &'static str,
    /// Menu section heading; `None` for top-level entries.
    pub section: Option<&'static str>,
    /// Hidden from non-admin operators. The guard does not enforce this.
    pub admin_only: bool,
}

const fn entry(path: &'static str, title: &'static str, admin_only: bool) -> MenuEntry {
    MenuEntry { path, title, section: None, admin_only }
}

const fn other(path: &'static str, title: &'static str) -> MenuEntry {
    MenuEntry { path, title, section: Some("Other"), admin_only: false }
}

pub const MENU: &[MenuEntry] = &[
    entry(HOME_PATH, "Home", false),
    entry("/users", "Users", true),
    entry("/books", "Books", false),
    entry("/categories", "Categories", false),
    entry("/borrows", "Borrow Records", false),
    entry("/reservations", "Reservations", false),
    entry("/reviews", "Reviews", false),
    entry("/favorites", "Favorites", false),
    entry("/notifications", "Notifications", false),
    entry("/statistics", "Statistics", true),
    other("/other/settings", "Settings"),
    other("/other/profile", "Profile"),
];

/// Menu entries visible to an operator with the given admin flag.
pub fn visible_menu(is_admin: bool) -> Vec<MenuEntry> {
    MENU.iter().filter(|e| is_admin || !e.admin_only).copied().collect()
}

/// Title for `path`, used in the page header.
pub fn title_for(path: &str) -> Option<&'static str> {
    let path = normalize(path);
    MENU.iter().find(|e| e.path == path).map(|e| e.title)
}

/// Drop a trailing slash (except on the root path).
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}
