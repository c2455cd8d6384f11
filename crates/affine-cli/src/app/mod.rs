//! Application-level utilities for the Affine CLI.

mod context;

pub use context::AppContext;
