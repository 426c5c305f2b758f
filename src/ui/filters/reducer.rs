use crate::ui::filters::intent::FilterIntent;
use crate::ui::mvi::Reducer;
use crate::view::{BillRange, FilterState};

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterState;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::Reset => FilterState::new(state.bounds),
            FilterIntent::SetBillRange { min, max } => FilterState {
                bill_range: BillRange::within(min, max, state.bounds),
                ..state
            },
            FilterIntent::NudgeMin { delta } => {
                let range = state.bill_range;
                let min = (range.min() + delta).max(state.bounds.min()).min(range.max());
                FilterState {
                    bill_range: BillRange::new(min, range.max()),
                    ..state
                }
            }
            FilterIntent::NudgeMax { delta } => {
                let range = state.bill_range;
                let max = (range.max() + delta).min(state.bounds.max()).max(range.min());
                FilterState {
                    bill_range: BillRange::new(range.min(), max),
                    ..state
                }
            }
            FilterIntent::ToggleTime(time) => {
                let mut times = state.times;
                if !times.remove(&time) {
                    times.insert(time);
                }
                FilterState { times, ..state }
            }
            FilterIntent::ToggleDay(day) => {
                let mut days = state.days;
                if !days.remove(&day) {
                    days.insert(day);
                }
                FilterState { days, ..state }
            }
            FilterIntent::SetTimes(times) => FilterState { times, ..state },
            FilterIntent::SetDays(days) => FilterState { days, ..state },
        }
    }
}
