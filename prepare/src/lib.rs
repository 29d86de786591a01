#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod encode;
pub mod output;
pub mod pipeline;
pub mod resolve;
pub mod tables;

mod error;

pub use config::CompilerConfig;
pub use error::PrepareError;
pub use pipeline::{compile, load};
