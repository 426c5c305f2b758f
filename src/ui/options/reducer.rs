use crate::ui::mvi::Reducer;
use crate::ui::options::intent::OptionsIntent;
use crate::ui::options::state::DisplayOptions;

pub struct OptionsReducer;

impl Reducer for OptionsReducer {
    type State = DisplayOptions;
    type Intent = OptionsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OptionsIntent::CycleScatterColor => DisplayOptions {
                scatter_color: state.scatter_color.next(),
                ..state
            },
            OptionsIntent::ToggleSize => DisplayOptions {
                show_size: !state.show_size,
                ..state
            },
            OptionsIntent::CycleSplit => DisplayOptions {
                split_by: state.split_by.next(),
                ..state
            },
            OptionsIntent::CycleMetric => DisplayOptions {
                bar_metric: state.bar_metric.next(),
                ..state
            },
            OptionsIntent::ToggleDayCount => DisplayOptions {
                show_day_count: !state.show_day_count,
                ..state
            },
            OptionsIntent::SetScatterColor(scatter_color) => DisplayOptions {
                scatter_color,
                ..state
            },
            OptionsIntent::SetSplit(split_by) => DisplayOptions { split_by, ..state },
            OptionsIntent::SetMetric(bar_metric) => DisplayOptions {
                bar_metric,
                ..state
            },
        }
    }
}
