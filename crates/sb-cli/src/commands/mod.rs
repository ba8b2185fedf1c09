//! CLI command implementations

pub(crate) mod columns;
pub(crate) mod common;
pub(crate) mod render;
