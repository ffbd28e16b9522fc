//! Document state and logic (UI-agnostic).

mod events;
mod io;
mod ops;
mod select;
mod state;
mod view;

pub use events::{Effect, Event};
pub use io::Export;
pub use state::Document;
pub use view::{CellView, Snapshot};
