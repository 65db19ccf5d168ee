pub mod todo_ops;
pub mod view;
