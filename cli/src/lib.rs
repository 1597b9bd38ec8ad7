pub mod error;
pub mod logging;
pub mod replay;
pub mod script;

pub use error::ReplayError;
pub use replay::{Replay, ReplaySummary};
pub use script::Script;
