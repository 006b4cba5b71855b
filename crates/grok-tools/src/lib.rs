//! External tool support for the indexer admin tool
//!
//! Resolves tool names against `PATH` and runs tools as subprocesses with
//! captured output and a bounded timeout.

pub mod error;
pub mod exec;
pub mod lookup;

pub use error::{Error, Result};
pub use exec::run;
pub use lookup::resolve;
