//! HTTP request handlers.

pub mod convert;
pub mod download;
pub mod status;

pub use convert::*;
pub use download::*;
pub use status::*;
