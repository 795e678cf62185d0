pub mod client;
pub mod config;
pub mod error;
pub mod factory;
pub mod fake_client;
pub mod pokemon;
pub mod service;

pub use client::*;
pub use config::*;
pub use error::*;
pub use factory::*;
pub use fake_client::*;
pub use pokemon::*;
pub use service::*;
