//! Data-fetching hooks

mod dashboard;
mod records;
mod remote_resource;

pub use dashboard::*;
pub use records::*;
pub use remote_resource::*;
