mod error;
mod sorting;
mod types;

pub use error::{Bound, WindowError};
pub use sorting::sort_windows;
pub use types::EventWindow;
