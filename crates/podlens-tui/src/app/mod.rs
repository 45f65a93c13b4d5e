mod action;
mod dispatch;
pub mod grid;
mod message;
mod requests;
mod state;

pub use action::Action;
pub use dispatch::Dispatcher;
pub use grid::{GridGeometry, RowWindow};
pub use message::{Command, Message};
pub use state::{
    DEFAULT_ANALYSIS_CACHE_SIZE, DEFAULT_REFRESH_INTERVAL, LOG_SCROLL_STEP, MAX_LOG_OFFSET,
    NavigationState, StartupOptions, TICK_INTERVAL, View, Viewport,
};
