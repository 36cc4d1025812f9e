//! Command-line frontends for `dnd-core`: `dndimport` and `dndcheck`.

pub mod cli;
