//! This library provides incremental sliding-window statistics such as
//!  * Net range counting over a sliding window as `NetRangeScanner`
//!  * Run-length bookkeeping for one step direction as `RunLedger`
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

#[cfg(test)]
pub mod generators;

mod ledger;
pub use ledger::*;

mod scanner;
pub use scanner::*;

mod step;
pub use step::*;

mod traits;
pub use self::traits::*;

pub mod io;
