//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it merges default configuration files,
//! explicit `--config` files, and `SHOPLIGHT__`-prefixed environment
//! variables, applies CLI overrides, and validates the result into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
