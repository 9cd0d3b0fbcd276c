mod pipeline;
mod predicates;

pub use pipeline::{
    check_date_only, check_date_time, has_date_part, has_time_part, in_range, is_complete,
    validate_date_only, validate_date_time,
};
pub use predicates::{
    compare_before, is_between, is_date_after, is_date_between, is_time_after, is_time_between,
    same_calendar_day, same_hour,
};

pub(crate) use pipeline::check_value;
