pub mod cascade;
pub mod cli;
pub mod config;
pub mod utils;

pub use cascade::FaceCascade;
pub use config::{Mode, Opts};
