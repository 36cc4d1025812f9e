//! Sorting battle-map archives into a library and checking map layouts.

pub mod config;
pub mod import;
pub mod logging;
pub mod mapname;
pub mod sanitize;
pub mod sig;
pub mod table;
pub mod validate;
