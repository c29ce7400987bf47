pub mod config;
pub mod errors;
pub mod json_time;
pub mod logger;
pub mod money;
pub mod response;

pub use config::EnvLoader;
pub use config::*;
pub use errors::*;
pub use logger::*;
pub use response::*;
