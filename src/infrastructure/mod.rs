pub mod config;
pub mod dispatch;
pub mod persistence;
pub mod workers;
