//! The round: phase order, round state, and the action dispatch machine.

pub mod machine;
pub mod phase;
pub mod state;

pub use phase::Phase;
pub use state::GameRound;
