pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, DeskError};
pub use events::{DeskEvent, EventBus};
pub use id::WindowId;
pub use types::{Rect, Size};

pub type Result<T> = std::result::Result<T, DeskError>;
