pub mod types;
pub mod client;
pub mod validator;

pub use types::*;
pub use client::*;
pub use validator::*;
