mod command;
mod query;
mod report;

pub use command::*;
pub use query::*;
pub use report::*;
