//! Core engine types: player identity, actions, errors, RNG.
//!
//! Everything here is independent of the role catalog and round flow.
//! The domain modules (`roles`, `round`, `scoring`, `stats`) build on top.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionKind};
pub use error::{ActionError, CatalogError, SetupError, StoreError};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
