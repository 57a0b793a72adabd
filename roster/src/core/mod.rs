//! Pure, deterministic logic: the worker record codec and menu parsing.

pub mod command;
pub mod record;
