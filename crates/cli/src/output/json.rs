//! JSON output formatting.

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::timestamps;

    #[test]
    fn test_format_json() {
        let outcome = timestamps::check("2013-05-01 12:00:00.5000");
        assert_eq!(
            format_json(&outcome),
            r#"{"value":"2013-05-01 12:00:00.5000","well_formed":true}"#
        );
    }
}
