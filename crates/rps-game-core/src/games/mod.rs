//! Move sets and the outcome rules.

mod move_set;
mod outcome;
mod traits;

pub use move_set::{MoveSet, MIN_MOVES};
pub use outcome::{decide, OutcomeTable};
pub use traits::GameJudge;
