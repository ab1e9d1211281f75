//! Tetros (workspace facade crate).
//!
//! This package keeps the `tetros::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tetros_core as core;
pub use tetros_input as input;
pub use tetros_term as term;
pub use tetros_types as types;
