//! Command implementations

mod parse;
mod scan;

pub use parse::parse;
pub use scan::scan;
