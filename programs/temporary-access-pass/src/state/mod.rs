pub mod program_config;
pub mod access_pass;

pub use program_config::*;
pub use access_pass::*;
