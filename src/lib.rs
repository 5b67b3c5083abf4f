pub mod category;
pub mod chart;
pub mod engine;
pub mod format;
pub mod parser;
pub mod transaction;
