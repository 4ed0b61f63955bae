pub mod api;
pub mod cli;
pub mod db;
pub mod paths;

/// Service banner served at `/`.
pub fn banner() -> &'static str {
    concat!("todos ", env!("CARGO_PKG_VERSION"))
}
