mod help_overlay;
mod notice;
mod status_bar;
mod workload_card;

pub use help_overlay::HelpOverlay;
pub use notice::{ErrorBanner, Placeholder};
pub use status_bar::{StatusBar, analysis_hints, grid_hints, list_nav_hints};
pub use workload_card::WorkloadCard;
