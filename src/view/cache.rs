use crate::data::Dataset;
use crate::view::{derive_view, DerivedView, FilterState};

/// Pull-based memo of the derived view.
///
/// The view is only recomputed when it is read with a filter state that
/// differs from the one it was last computed for.
#[derive(Debug, Default)]
pub struct ViewCache {
    key: Option<FilterState>,
    view: DerivedView,
    recomputations: u64,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, dataset: &Dataset, state: &FilterState) -> &DerivedView {
        if self.key.as_ref() != Some(state) {
            self.view = derive_view(dataset, state);
            self.key = Some(state.clone());
            self.recomputations += 1;
            tracing::debug!(
                rows = self.view.len(),
                recomputations = self.recomputations,
                "Derived view recomputed"
            );
        }
        &self.view
    }

    /// How many times the view has been rebuilt.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
