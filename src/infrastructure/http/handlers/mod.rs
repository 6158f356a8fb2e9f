//! HTTP Handlers

mod ping;
mod users;

pub use ping::*;
pub use users::*;
