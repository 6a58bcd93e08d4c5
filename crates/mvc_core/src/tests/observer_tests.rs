use super::*;
use parking_lot::Mutex;

#[test]
fn notify_observer_invokes_handler_with_notification() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let observer = Observer::new(
        move |note: &Notification| sink.lock().push(note.name().to_string()),
        ContextId::next(),
    );

    observer.notify_observer(&Notification::new("ObserverTestNote").with_body(10));

    assert_eq!(*seen.lock(), vec!["ObserverTestNote".to_string()]);
}

#[test]
fn compare_notify_context_matches_identity_only() {
    let context = ContextId::next();
    let other = ContextId::next();
    let observer = Observer::new(|_: &Notification| {}, context);

    assert!(observer.compare_notify_context(context));
    assert!(!observer.compare_notify_context(other));
}

#[test]
fn handler_and_context_can_be_replaced() {
    let hits = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&hits);
    let mut observer = Observer::new(|_: &Notification| {}, ContextId::next());

    let replacement: Arc<dyn NotificationHandler> =
        Arc::new(move |_: &Notification| *counter.lock() += 1);
    let context = ContextId::next();
    observer.set_handler(replacement);
    observer.set_context(context);
    observer.notify_observer(&Notification::new("Ping"));

    assert_eq!(*hits.lock(), 1);
    assert_eq!(observer.context(), context);
}

#[test]
fn observers_built_from_shared_handler_share_it() {
    let hits = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&hits);
    let handler: Arc<dyn NotificationHandler> =
        Arc::new(move |_: &Notification| *counter.lock() += 1);
    let first = Observer::from_shared(Arc::clone(&handler), ContextId::next());
    let second = Observer::from_shared(Arc::clone(&handler), ContextId::next());

    first.notify_observer(&Notification::new("Shared"));
    second.notify_observer(&Notification::new("Shared"));

    assert_eq!(*hits.lock(), 2);
    assert_eq!(Arc::strong_count(&handler), 3);
    assert_ne!(first.context(), second.context());
}
