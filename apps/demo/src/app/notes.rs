pub const STARTUP: &str = "startup";
pub const ADD_TODO: &str = "add_todo";
pub const COMPLETE_TODO: &str = "complete_todo";
pub const TODOS_CHANGED: &str = "todos_changed";
pub const TODO_REJECTED: &str = "todo_rejected";
