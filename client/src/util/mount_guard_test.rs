use super::*;

#[test]
fn new_guard_is_mounted() {
    assert!(MountGuard::new().is_mounted());
}

#[test]
fn release_is_seen_by_clones() {
    let guard = MountGuard::new();
    let task_copy = guard.clone();
    guard.release();
    assert!(!task_copy.is_mounted());
}
