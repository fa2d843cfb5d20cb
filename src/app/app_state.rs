use std::time::Instant;

use crate::config::Config;
use crate::data::{ChartSource, DataLoader};
use crate::error::RangeviewError;
use crate::notification::NotificationCenter;
use crate::panel::FilterablePanel;

/// Application state
pub struct App {
    pub notifications: NotificationCenter,
    pub panel: FilterablePanel,
    pub should_quit: bool,
}

impl App {
    /// Create the app and start fetching from the configured source
    pub fn new(config: &Config) -> Result<Self, RangeviewError> {
        let loader = DataLoader::spawn(ChartSource::new(config.source.url.as_str()));
        Self::with_loader(loader, config)
    }

    /// Create the app around an existing loader
    pub fn with_loader(loader: DataLoader, config: &Config) -> Result<Self, RangeviewError> {
        let notifications = NotificationCenter::new(config.notification.dismiss_policy);

        let mut panel = FilterablePanel::new(&notifications.context())?;
        panel.mount(loader);

        Ok(Self {
            notifications,
            panel,
            should_quit: false,
        })
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance timers and pick up the fetch result
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.panel.poll_data();
        self.notifications.tick(now);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
