//! Dice core - choice set, pick sequencer and roll history
//!
//! Nothing in here touches the browser; the UI drives it with timers.

pub mod choices;
pub mod history;
pub mod sequencer;
pub mod session;

pub use choices::ChoiceSet;
pub use history::{RollHistory, RollRecord};
pub use sequencer::{Phase, PickTicket, TickOutcome, Timing};
pub use session::DiceSession;
