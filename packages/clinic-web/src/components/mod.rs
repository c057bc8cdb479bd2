//! Reusable UI components

mod activity_feed;
mod appointment_queue;
mod error_banner;
mod layout;
mod loading;
mod pager;
mod sidebar;
mod stat_card;

pub use activity_feed::*;
pub use appointment_queue::*;
pub use error_banner::*;
pub use layout::*;
pub use loading::*;
pub use pager::*;
pub use sidebar::*;
pub use stat_card::*;
