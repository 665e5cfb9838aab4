//! Bounded key press/release history tracking for hotkey combo matching.
//!
//! [`KeyTracker`] turns a stream of key-down/key-up events into a bounded,
//! sorted snapshot of the keys currently held and the keys most recently
//! released, so application code can pattern-match simple or compound
//! hotkey combinations (e.g. Shift+Tab+D all held).
//!
//! Each history keeps at most [`HISTORY_CAP`] entries. Presses are
//! deduplicated (a repeat moves the key to the front); releases keep
//! duplicates so repeated click sequences stay visible. Updates are pure:
//! the host threads one immutable tracker value through its event loop.

pub mod combo;
pub mod config;
pub mod consts;
pub mod monitor;
pub mod symbols;
pub mod tracker;

pub use combo::ComboState;
pub use symbols::{AliasSymbols, KeySymbol, RawSymbols, SymbolMap};
pub use tracker::{HISTORY_CAP, KeyTracker};
