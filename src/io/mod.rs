pub mod config_io;
pub mod data_dir;
pub mod recovery;
pub mod store;
pub mod todo_io;
