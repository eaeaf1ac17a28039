pub mod histogram;
pub mod match_log;
pub mod session;

pub use match_log::{MatchState, Score};
pub use session::Session;
