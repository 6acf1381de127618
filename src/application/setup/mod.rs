//! Setup screen state machine.

mod controller;
mod state;

pub use controller::{CategoryLoad, CategoryLoadOutcome, LoadEvents, LoadReport, SetupController};
pub use state::{DEFAULT_PAGE_SIZE, SetupState};
