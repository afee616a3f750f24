pub mod abbreviations;
pub mod players;
pub mod schedule;
pub mod season;
pub mod team;

pub use abbreviations::*;
pub use players::*;
pub use schedule::*;
pub use season::*;
pub use team::*;
