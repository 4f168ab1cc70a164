pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{GeneratorConfig, load_config};
pub use domain::token::{Substitution, Token};
