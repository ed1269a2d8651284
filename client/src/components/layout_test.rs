use super::*;

#[test]
fn root_is_only_active_on_root() {
    assert!(nav_active("/", "/"));
    assert!(!nav_active("/", "/games"));
}

#[test]
fn section_is_active_on_nested_routes() {
    assert!(nav_active("/lessons", "/lessons"));
    assert!(nav_active("/lessons", "/lessons/quiz"));
    assert!(!nav_active("/lessons", "/lessonsx"));
}

#[test]
fn every_nav_item_is_a_rooted_path() {
    assert!(NAV_ITEMS.iter().all(|(href, _)| href.starts_with('/')));
}
