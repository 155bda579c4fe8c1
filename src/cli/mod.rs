pub mod ingredient;
pub mod migrate;
pub mod recipe;
pub mod server;
pub mod tag;
