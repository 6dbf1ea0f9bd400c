pub mod application;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod registry;
