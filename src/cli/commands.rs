pub mod serve;
pub mod show_config;

pub use serve::serve;
pub use show_config::show_config;
