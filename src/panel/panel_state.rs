use super::bound_input::BoundInput;
use super::chart::ChartSpec;
use crate::data::DataLoader;
use crate::data::SeriesPair;
use crate::data::loader::FetchResult;
use crate::error::RangeviewError;
use crate::filter::{Bounds, filter_pair};
use crate::notification::{Notifier, NotifierContext, Severity};

pub const LOAD_SUCCESS_MESSAGE: &str = "Chart data loaded successfully";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load chart data";
pub const EMPTY_STATE_MESSAGE: &str =
    "No data available for the selected range. Please adjust your filters.";

const LOWER_TITLE: &str = "Min Value (Filter Lower Bound)";
const LOWER_PLACEHOLDER: &str = "e.g., 20";
const UPPER_TITLE: &str = "Max Value (Filter Upper Bound)";
const UPPER_PLACEHOLDER: &str = "e.g., 50";

/// Which control receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    #[default]
    LowerBound,
    UpperBound,
    ResetButton,
}

impl PanelFocus {
    pub fn next(self) -> Self {
        match self {
            PanelFocus::LowerBound => PanelFocus::UpperBound,
            PanelFocus::UpperBound => PanelFocus::ResetButton,
            PanelFocus::ResetButton => PanelFocus::LowerBound,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PanelFocus::LowerBound => PanelFocus::ResetButton,
            PanelFocus::UpperBound => PanelFocus::LowerBound,
            PanelFocus::ResetButton => PanelFocus::UpperBound,
        }
    }
}

/// Chart panel state
pub struct FilterablePanel {
    notifier: Notifier,
    raw: SeriesPair,
    filtered: SeriesPair,
    pub lower: BoundInput,
    pub upper: BoundInput,
    pub focus: PanelFocus,
    loader: Option<DataLoader>,
    mounted: bool,
}

impl FilterablePanel {
    /// Create the panel, taking its notifier from `ctx`
    ///
    /// Fails with [`RangeviewError::NotifierUnavailable`] when no
    /// NotificationCenter is mounted above it.
    pub fn new(ctx: &NotifierContext) -> Result<Self, RangeviewError> {
        let notifier = ctx.notifier()?;

        Ok(Self {
            notifier,
            raw: SeriesPair::default(),
            filtered: SeriesPair::default(),
            lower: BoundInput::new(LOWER_TITLE, LOWER_PLACEHOLDER),
            upper: BoundInput::new(UPPER_TITLE, UPPER_PLACEHOLDER),
            focus: PanelFocus::default(),
            loader: None,
            mounted: false,
        })
    }

    /// Start the one-shot fetch. Only the first call has any effect.
    pub fn mount(&mut self, loader: DataLoader) {
        if self.mounted {
            log::debug!("Panel already mounted, ignoring second loader");
            return;
        }
        self.mounted = true;
        self.loader = Some(loader);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(|l| l.is_loading())
    }

    /// Apply the fetch result if it has arrived. Returns true when it did.
    pub fn poll_data(&mut self) -> bool {
        let Some(loader) = self.loader.as_mut() else {
            return false;
        };
        let Some(result) = loader.poll() else {
            return false;
        };

        self.loader = None;
        self.apply_fetch_result(result);
        true
    }

    fn apply_fetch_result(&mut self, result: FetchResult) {
        match result {
            Ok(pair) => {
                log::info!(
                    "Loaded chart data: {} + {} values",
                    pair.dataset_one.len(),
                    pair.dataset_two.len()
                );
                self.raw = pair;
                self.refilter();
                self.notifier.notify(Severity::Success, LOAD_SUCCESS_MESSAGE);
            }
            Err(e) => {
                log::error!("Error fetching data: {}", e);
                self.notifier.notify(Severity::Failure, LOAD_FAILURE_MESSAGE);
            }
        }
    }

    pub fn set_lower_bound(&mut self, text: &str) {
        self.lower.set_text(text);
        self.refilter();
    }

    pub fn set_upper_bound(&mut self, text: &str) {
        self.upper.set_text(text);
        self.refilter();
    }

    /// Clear both bounds and show the raw series again
    pub fn reset(&mut self) {
        self.lower.clear();
        self.upper.clear();
        self.filtered = self.raw.clone();
    }

    /// Recompute the filtered pair from the raw pair and current bound texts
    pub(super) fn refilter(&mut self) {
        self.filtered = filter_pair(&self.raw, &self.bounds());
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_texts(self.lower.text(), self.upper.text())
    }

    pub fn lower_text(&self) -> &str {
        self.lower.text()
    }

    pub fn upper_text(&self) -> &str {
        self.upper.text()
    }

    pub fn raw(&self) -> &SeriesPair {
        &self.raw
    }

    pub fn filtered(&self) -> &SeriesPair {
        &self.filtered
    }

    /// Both filtered series are empty
    pub fn is_data_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec::from_pair(&self.filtered)
    }
}

#[cfg(test)]
#[path = "panel_state_tests.rs"]
mod panel_state_tests;
