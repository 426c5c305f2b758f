mod intent;
mod reducer;
mod state;

pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use crate::view::{BillRange, FilterState};
