use crate::config::Config;
use crate::data::Dataset;
use crate::ui::filters::{FilterIntent, FilterReducer};
use crate::ui::mvi::Reducer;
use crate::ui::options::{DisplayOptions, OptionsIntent, OptionsReducer};
use crate::view::{DerivedView, FilterState, ViewCache};
use std::sync::Arc;

/// Dashboard card that has keyboard focus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Panel {
    Table,
    Scatter,
    Distribution,
    Bars,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Table, Panel::Scatter, Panel::Distribution, Panel::Bars];

    fn step(self, direction: i32) -> Self {
        let len = Self::ALL.len();
        let current = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        let next = if direction.is_negative() {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };
        Self::ALL[next]
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Everything the event loop owns.
///
/// The dataset is shared read-only; filters and options are only replaced
/// through their reducers inside event handlers.
pub struct App {
    should_quit: bool,
    dataset: Arc<Dataset>,
    filters: FilterState,
    options: DisplayOptions,
    view_cache: ViewCache,
    bill_step: f64,
    focus: Panel,
    maximized: bool,
    table_offset: usize,
}

impl App {
    pub fn new(dataset: Arc<Dataset>, config: &Config) -> Self {
        let filters = FilterState::new(dataset.bill_bounds());
        Self {
            should_quit: false,
            dataset,
            filters,
            options: DisplayOptions::from(&config.display),
            view_cache: ViewCache::new(),
            bill_step: config.ui.bill_step,
            focus: Panel::Table,
            maximized: false,
            table_offset: 0,
        }
    }

    /// Start from `filters` instead of the defaults (e.g. CLI overrides).
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn bill_step(&self) -> f64 {
        self.bill_step
    }

    /// The filtered rows, recomputed only if the filters changed since the
    /// last read.
    pub fn view(&mut self) -> &DerivedView {
        self.view_cache.get(&self.dataset, &self.filters)
    }

    pub fn view_recomputations(&self) -> u64 {
        self.view_cache.recomputations()
    }

    // ========================================================================
    // Filter and option dispatch (MVI pattern)
    // ========================================================================

    pub fn dispatch_filter(&mut self, intent: FilterIntent) {
        tracing::debug!(?intent, "Filter intent");
        dispatch_mvi!(self, filters, FilterReducer, intent);
        self.table_offset = 0;
    }

    pub fn dispatch_options(&mut self, intent: OptionsIntent) {
        tracing::debug!(?intent, "Display option intent");
        dispatch_mvi!(self, options, OptionsReducer, intent);
    }

    pub fn reset_filters(&mut self) {
        tracing::info!("Filters reset");
        self.dispatch_filter(FilterIntent::Reset);
    }

    // ========================================================================
    // Panel focus and scrolling
    // ========================================================================

    pub fn focus(&self) -> Panel {
        self.focus
    }

    pub fn move_focus(&mut self, direction: i32) {
        self.focus = self.focus.step(direction);
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
    }

    pub fn table_offset(&self) -> usize {
        self.table_offset
    }

    /// Scroll the data table, keeping at least one row on screen.
    pub fn scroll_table(&mut self, delta: i32) {
        let rows = self.view().len();
        let max_offset = rows.saturating_sub(1);
        let offset = if delta.is_negative() {
            self.table_offset.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.table_offset.saturating_add(delta as usize)
        };
        self.table_offset = offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Day, MealTime};

    fn make_app() -> App {
        let dataset = Arc::new(Dataset::bundled().unwrap());
        App::new(dataset, &Config::default())
    }

    #[test]
    fn starts_with_full_view() {
        let mut app = make_app();
        let total = app.dataset().len();
        assert_eq!(app.view().len(), total);
        assert!(app.filters().is_default());
    }

    #[test]
    fn view_is_memoized_until_filters_change() {
        let mut app = make_app();
        app.view();
        app.view();
        assert_eq!(app.view_recomputations(), 1);

        app.dispatch_filter(FilterIntent::ToggleDay(Day::Sun));
        app.view();
        app.view();
        assert_eq!(app.view_recomputations(), 2);
    }

    #[test]
    fn option_changes_do_not_recompute_view() {
        let mut app = make_app();
        app.view();
        app.dispatch_options(OptionsIntent::CycleMetric);
        app.dispatch_options(OptionsIntent::ToggleSize);
        app.view();
        assert_eq!(app.view_recomputations(), 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = make_app();
        app.dispatch_filter(FilterIntent::ToggleTime(MealTime::Lunch));
        app.dispatch_filter(FilterIntent::NudgeMin { delta: 5.0 });
        assert!(!app.filters().is_default());
        app.reset_filters();
        assert!(app.filters().is_default());
    }

    #[test]
    fn reset_back_to_same_state_reuses_cached_view() {
        let mut app = make_app();
        app.view();
        app.reset_filters();
        app.view();
        assert_eq!(app.view_recomputations(), 1);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = make_app();
        app.move_focus(-1);
        assert_eq!(app.focus(), Panel::Bars);
        app.move_focus(1);
        assert_eq!(app.focus(), Panel::Table);
    }

    #[test]
    fn table_scroll_is_clamped() {
        let mut app = make_app();
        app.scroll_table(-3);
        assert_eq!(app.table_offset(), 0);
        app.scroll_table(10_000);
        assert_eq!(app.table_offset(), app.dataset().len() - 1);
    }

    #[test]
    fn filter_change_resets_table_scroll() {
        let mut app = make_app();
        app.scroll_table(5);
        app.dispatch_filter(FilterIntent::ToggleDay(Day::Sat));
        assert_eq!(app.table_offset(), 0);
    }
}
