mod error;
mod parse;
mod range;
mod value;

pub use error::{Component, DateError};
pub use parse::parse;
pub use range::ValidRange;
pub use value::CalendarValue;

pub(crate) use value::DATE_TIME_FORMAT;
