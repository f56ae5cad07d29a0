pub mod config;
pub mod destination;
pub mod error;
pub mod handler;
pub mod logging;
pub mod payload;
pub mod report;
pub mod runner;
pub mod statistics;
