pub mod traits;
pub mod interpreter;
pub mod input;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use interpreter::InterpreterConfig;
pub use input::InputConfig;
