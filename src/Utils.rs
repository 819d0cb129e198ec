//! different utility modules used throughout the project
/// settings for logging and quiz generation, read from a TOML file
pub mod config;
/// tiny module to set up terminal and file logging
pub mod logger;
