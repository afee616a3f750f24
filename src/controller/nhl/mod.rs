pub mod aggregator;
pub mod cache;
pub mod client;

pub use aggregator::*;
pub use cache::*;
pub use client::*;
