//! Authentication and session state

mod context;
mod session;

pub use context::*;
