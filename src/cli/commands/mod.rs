pub mod common;
pub mod completion;
pub mod config;
pub mod prune;
pub mod scan;
