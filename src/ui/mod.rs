//! Native model of the browser screen: session state, the backend it talks
//! to, and the controller that ties them together.

pub mod backend;
pub mod controller;
pub mod state;

pub use backend::{Backend, HttpBackend};
pub use controller::{DragEvent, UiController};
pub use state::{SessionState, ViewState};
