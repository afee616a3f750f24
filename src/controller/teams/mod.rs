pub mod http_handlers;
pub mod state;

pub use http_handlers::*;
pub use state::*;
