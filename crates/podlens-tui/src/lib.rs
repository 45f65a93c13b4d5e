//! TUI components for podlens
//!
//! This crate provides the terminal user interface for podlens: the
//! navigation state machine, grid geometry, request dispatch, keybindings,
//! settings, event handling, and the screens that render it all.

pub mod app;
pub mod config;
pub mod tui;
pub mod ui;

pub use app::{
    Action, Command, Dispatcher, GridGeometry, Message, NavigationState, RowWindow,
    StartupOptions, View, Viewport,
};
pub use config::{KeyBinding, KeyBindings, KeyContext, Settings, SettingsError};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{ErrorBanner, HelpOverlay, Placeholder, StatusBar, WorkloadCard};
pub use ui::screens::{LogAnalysisScreen, NamespaceSelectScreen, WorkloadGridScreen};
pub use ui::{Layout, Strings, Theme, render};
