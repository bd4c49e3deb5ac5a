//! Storage layer for statemirror.
//!
//! This crate implements the readable side of a mirrored property:
//! - ValueCell: byte buffer behind a mutex, snapshot reads, whole-value replace.
//! - ContinuousCell: readable cell that only stores state.
//! - DiscreteCell: readable cell that notifies a weakly held slot on every update.
//!
//! Lock scope is a single copy in or out. A read sequence captures the
//! value once at offset 0 and never touches the lock again.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod continuous;
pub mod discrete;

pub use cell::ValueCell;
pub use continuous::ContinuousCell;
pub use discrete::DiscreteCell;
