pub mod health;
pub mod todos;
pub mod cwd;
pub mod directories;
pub mod files;

pub use health::health_handler;
pub use todos::{create_todo_handler, delete_todo_handler, get_todo_handler, list_todos_handler};
pub use cwd::{get_cwd_handler, set_cwd_handler};
pub use directories::{
    create_directory_handler, delete_directory_handler, list_cwd_handler, list_directory_handler,
    rename_directory_handler,
};
pub use files::{create_file_handler, delete_file_handler, put_file_handler, read_file_handler};
