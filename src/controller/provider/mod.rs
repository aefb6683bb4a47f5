pub mod client;
pub mod teams;

pub use client::*;
pub use teams::*;
