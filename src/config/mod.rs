pub mod environment;

pub use environment::{log_file_from_env, Config, ConfigError};
