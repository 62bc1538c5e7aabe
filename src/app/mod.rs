// ABOUTME: Application module containing state management and event handling

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{App, AppState, View};
