mod intent;
mod reducer;
mod state;

pub use intent::OptionsIntent;
pub use reducer::OptionsReducer;
pub use state::DisplayOptions;
