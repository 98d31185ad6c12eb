mod error;
mod io;
mod settings;


pub use error::{ConfigError, Result};
pub(crate) use io::is_yaml;
pub use io::{load_settings, save_settings};
pub use settings::{BrushSettings, Settings, StackSettings, validate_diameter};
