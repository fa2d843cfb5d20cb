//! Filterable chart panel
//!
//! Owns the raw and filtered series, the two bound inputs and the reset
//! button, and reports the outcome of its one-shot fetch to the notifier.

mod bound_input;
pub mod chart;
mod panel_events;
pub mod panel_render;
mod panel_state;

pub use bound_input::BoundInput;
pub use chart::{CHART_LABELS, ChartDataset, ChartSpec};
pub use panel_state::{
    EMPTY_STATE_MESSAGE, FilterablePanel, LOAD_FAILURE_MESSAGE, LOAD_SUCCESS_MESSAGE, PanelFocus,
};
