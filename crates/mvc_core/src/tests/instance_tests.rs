use super::*;

fn unique_key() -> CoreKey {
    CoreKey::new(format!("instance-test-{}", uuid::Uuid::new_v4()))
}

#[test]
fn second_acquire_for_same_kind_and_key_fails() {
    let key = unique_key();
    let _first = InstanceGuard::acquire(CoreKind::View, &key).expect("first view");

    let err = InstanceGuard::acquire(CoreKind::View, &key).expect_err("second view");
    assert_eq!(err, MvcError::singleton_violation(CoreKind::View, key.clone()));
    assert_eq!(err.to_string(), "View singleton already constructed!");
}

#[test]
fn kinds_are_tracked_independently() {
    let key = unique_key();
    let _model = InstanceGuard::acquire(CoreKind::Model, &key).expect("model");
    let _view = InstanceGuard::acquire(CoreKind::View, &key).expect("view");

    assert!(is_live(CoreKind::Model, &key));
    assert!(is_live(CoreKind::View, &key));
    assert!(!is_live(CoreKind::Controller, &key));
}

#[test]
fn dropping_guard_releases_the_key() {
    let key = unique_key();
    let guard = InstanceGuard::acquire(CoreKind::Controller, &key).expect("controller");
    assert!(is_live(CoreKind::Controller, &key));

    drop(guard);
    assert!(!is_live(CoreKind::Controller, &key));
    InstanceGuard::acquire(CoreKind::Controller, &key).expect("reacquire after release");
}
