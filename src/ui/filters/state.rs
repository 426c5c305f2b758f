use crate::ui::mvi::UiState;
use crate::view::FilterState;

impl UiState for FilterState {}
