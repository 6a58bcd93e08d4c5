use super::*;

use mvc_core::Notifier;
use super::todo_proxy::{TodoError, TodoItem};

fn settings_with(seeds: &[&str]) -> Settings {
    Settings {
        core_key: format!("demo-test-{}", uuid::Uuid::new_v4()),
        log_filter: "off".into(),
        seed_items: seeds.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn bootstrap_registers_store_view_and_commands() {
    let facade = bootstrap(&settings_with(&[])).expect("bootstrap");

    assert!(facade.has_proxy(TodoProxy::NAME));
    assert!(facade.has_mediator(TodoListMediator::NAME));
    for name in [notes::STARTUP, notes::ADD_TODO, notes::COMPLETE_TODO] {
        assert!(facade.has_command(name), "{name} should be mapped");
    }
    assert!(rendered_lines(&facade).is_empty());
}

#[test]
fn seed_items_are_rendered_in_order() {
    let facade = bootstrap(&settings_with(&["first", "second"])).expect("bootstrap");

    assert_eq!(
        rendered_lines(&facade),
        vec![" 1. [ ] first", " 2. [ ] second"]
    );
}

#[test]
fn add_and_complete_update_proxy_and_view() {
    let facade = bootstrap(&settings_with(&["ship it"])).expect("bootstrap");

    facade.send_notification(notes::ADD_TODO, Some(json!("write tests")), None);
    facade.send_notification(notes::COMPLETE_TODO, Some(json!(1)), None);

    let proxy = facade
        .retrieve_proxy_as::<TodoProxy>(TodoProxy::NAME)
        .expect("proxy");
    assert_eq!(
        proxy.items(),
        vec![
            TodoItem {
                text: "ship it".into(),
                done: true
            },
            TodoItem {
                text: "write tests".into(),
                done: false
            },
        ]
    );
    assert_eq!(
        rendered_lines(&facade),
        vec![" 1. [x] ship it", " 2. [ ] write tests"]
    );
}

#[test]
fn rejected_operations_are_shown_without_changing_items() {
    let facade = bootstrap(&settings_with(&["only"])).expect("bootstrap");

    facade.send_notification(notes::COMPLETE_TODO, Some(json!(4)), None);
    facade.send_notification(notes::ADD_TODO, Some(json!("   ")), None);

    assert_eq!(
        rendered_lines(&facade),
        vec![
            " 1. [ ] only",
            "!! no todo at position 4 (list has 1)",
            "!! todo text must not be empty",
        ]
    );
}

#[test]
fn complete_with_unusable_index_is_rejected() {
    let facade = bootstrap(&settings_with(&["only"])).expect("bootstrap");

    facade.send_notification(notes::COMPLETE_TODO, Some(json!(-1)), None);
    facade.send_notification(notes::COMPLETE_TODO, Some(json!("first")), None);

    assert_eq!(
        rendered_lines(&facade),
        vec![
            " 1. [ ] only",
            "!! no todo at position 0 (list has 1)",
            "!! no todo at position 0 (list has 1)",
        ]
    );
}

#[test]
fn second_bootstrap_for_same_key_fails() {
    let settings = settings_with(&[]);
    let _facade = bootstrap(&settings).expect("bootstrap");

    let err = bootstrap(&settings).err().expect("duplicate core");
    assert_eq!(err.to_string(), "Facade singleton already constructed!");
}

#[test]
fn proxy_rejects_out_of_range_and_empty_input() {
    let proxy = TodoProxy::new(Notifier::detached());
    assert_eq!(proxy.add(""), Err(TodoError::EmptyText));
    assert_eq!(
        proxy.complete(0),
        Err(TodoError::NoSuchItem { index: 0, len: 0 })
    );

    let added = proxy.add("  trimmed ").expect("add");
    assert_eq!(added.text, "trimmed");
    assert!(proxy.complete(1).expect("complete").done);
}
