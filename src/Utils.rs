//! different utility modules used throughout the project
/// terminal/file logger initialisation
pub mod logger;
/// save and load sets of variables to/from a TOML file
pub mod var_storage;
