//! Game core: shelf generation and the round state machine. No DOM access in here.

pub mod clock;
pub mod controller;
pub mod events;
pub mod round;
pub mod shuffle;
pub mod slots;

pub use controller::{GameAction, GameController, Phase};
pub use events::{GridCell, RoundSummary, ShoppingEntry};
pub use shuffle::RngState;
