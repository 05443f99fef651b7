pub mod logger;
pub mod ticker;
