//! Path resolution for todos data files.
//!
//! Provides XDG-compliant path resolution.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "todos";

/// Get XDG-compliant data directory for todos.
///
/// Resolution order: `$XDG_DATA_HOME/todos`, then `$HOME/.local/share/todos`,
/// then `./todos` when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join(APP_DIR)
}

/// Get database file path (data_dir/todos.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("todos.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_data_dir_ends_with_app_dir() {
        let path = get_data_dir();
        assert!(path.ends_with("todos"));
    }

    #[test]
    #[serial]
    fn test_get_db_path_is_inside_data_dir() {
        let path = get_db_path();
        assert!(path.ends_with("todos/todos.db"));
        assert_eq!(path.parent(), Some(get_data_dir().as_path()));
    }

    #[test]
    #[serial]
    fn test_xdg_data_home_takes_precedence() {
        let previous = env::var("XDG_DATA_HOME").ok();
        unsafe {
            env::set_var("XDG_DATA_HOME", "/tmp/xdg-todos-test");
        }

        assert_eq!(get_data_dir(), PathBuf::from("/tmp/xdg-todos-test/todos"));

        unsafe {
            match previous {
                Some(value) => env::set_var("XDG_DATA_HOME", value),
                None => env::remove_var("XDG_DATA_HOME"),
            }
        }
    }
}
