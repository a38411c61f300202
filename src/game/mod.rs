//! Game controller: the turn-based session state machine.
//!
//! Drives `playing -> correct|wrong -> playing -> ... -> game over` by
//! calling the pure rules functions and applying their decisions to the
//! session state (timeline, players, deck).
//!
//! ## Key Types
//!
//! - `GameBuilder`: configures and deals a session
//! - `Game`: the running session
//! - `GameStatus`: session status
//! - `GameSnapshot`: serializable session state

pub mod session;
pub mod snapshot;

pub use session::{Game, GameBuilder, GameStatus};
pub use snapshot::GameSnapshot;
