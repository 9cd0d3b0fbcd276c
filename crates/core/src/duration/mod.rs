mod engine;

pub use engine::{
    duration, duration_report, elapsed_seconds, elapsed_whole_days, max_duration,
    signed_duration, DurationReport, SECONDS_PER_DAY,
};

pub(crate) use engine::cross_check;
