#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod heartbeat;
pub mod resource;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use resource::{Resource, ResourceState};
