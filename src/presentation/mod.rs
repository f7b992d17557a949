/// Page view state and transitions
pub mod view;

pub use view::{View, ViewEvent, next_view};
