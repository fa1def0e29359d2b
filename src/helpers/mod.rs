//! Helper functions shared by the generator and the CLI
//!
//! Dates, URLs and escaping. Everything here is a pure function of its
//! inputs; "today" is always passed in by the caller.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
