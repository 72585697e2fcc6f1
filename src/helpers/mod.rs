//! Small helpers shared by the sources, feeds and server

mod date;
mod url;

pub use date::*;
pub use url::*;
