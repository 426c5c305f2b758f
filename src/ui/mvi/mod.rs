//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of dashboard state that the user can change (filters,
//! display options) is an immutable [`UiState`] value replaced by a
//! [`Reducer`] in response to an [`Intent`].
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ derived view ──→ displays
//!    ↑                                                 │
//!    └─────────────────── key press ───────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
