use super::*;

#[test]
fn normalize_strips_trailing_slash() {
    assert_eq!(normalize("/login/"), "/login");
    assert_eq!(normalize("/other/profile"), "/other/profile");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize(""), "/");
}

#[test]
fn admins_see_every_entry() {
    assert_eq!(visible_menu(true).len(), MENU.len());
}

#[test]
fn non_admins_do_not_see_admin_entries() {
    let menu = visible_menu(false);
    assert!(menu.iter().all(|e| !e.admin_only));
    assert!(!menu.iter().any(|e| e.path == "/users"));
    assert!(!menu.iter().any(|e| e.path == "/statistics"));
    assert!(menu.iter().any(|e| e.path == "/books"));
}

#[test]
fn other_section_holds_settings_and_profile() {
    let section: Vec<&str> = MENU.iter().filter(|e| e.section == Some("Other")).map(|e| e.path).collect();
    assert_eq!(section, vec!["/other/settings", "/other/profile"]);
}

#[test]
fn title_lookup_normalizes_path() {
    assert_eq!(title_for("/books/"), Some("Books"));
    assert_eq!(title_for("/"), Some("Home"));
    assert!(title_for("/nowhere").is_none());
}

#[test]
fn paths_are_unique() {
    for (i, a) in MENU.iter().enumerate() {
        for b in &MENU[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}
