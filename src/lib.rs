//! rangeview: terminal bar chart of two fetched numeric series with live
//! range filtering and toast notifications.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod logging;
pub mod notification;
pub mod panel;
pub mod widgets;
