//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The name the greeting header addresses (as in "Good morning, Liora").
/// Feel free to override it when initing this library.
pub static USER_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Liora".to_string())));

/// The tag applied to tasks created from the add-task dialog (the dialog has no tag field).
/// Feel free to override it when initing this library.
pub static DEFAULT_TAG: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Energy".to_string())));

/// The column newly created tasks are inserted into.
/// Feel free to override it when initing this library.
pub static DEFAULT_COLUMN: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("To-Do".to_string())));

pub fn user_name() -> String {
    USER_NAME.lock().unwrap().clone()
}

pub fn default_tag() -> String {
    DEFAULT_TAG.lock().unwrap().clone()
}

pub fn default_column() -> String {
    DEFAULT_COLUMN.lock().unwrap().clone()
}
