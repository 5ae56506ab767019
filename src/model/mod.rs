pub mod config;
pub mod locale;
pub mod task;

pub use config::*;
pub use locale::*;
pub use task::*;
