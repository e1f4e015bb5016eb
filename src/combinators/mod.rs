//! Combinators over [`Parser`](crate::parser::Parser) values: sequencing,
//! backtracking choice, and repetition.

pub mod choice;
pub mod repetition;
pub mod sequencing;

pub use choice::{except, not_, otherwise};
pub use repetition::{at_least_once, concat, many, once, take, until};
pub use sequencing::{named, select, select_many, then, then_discard, where_, with_message};
