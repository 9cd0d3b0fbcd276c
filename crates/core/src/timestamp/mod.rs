mod generator;

pub use generator::{generate, generate_at, is_well_formed};
