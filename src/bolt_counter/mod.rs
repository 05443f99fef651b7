pub mod core;
pub mod error;
pub mod main;
pub mod render;
pub mod run;
pub mod run_effect;
pub mod session_log;
#[cfg(test)]
mod tests;
pub mod validate;
