//! JSON rendering for the type dictionary.

use crate::error::{Error, Result};
use crate::resolve::TypeDictionary;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a type dictionary as a JSON object keyed by nested type name.
pub fn to_json(dictionary: &TypeDictionary, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(dictionary),
        JsonFormat::Compact => serde_json::to_string(dictionary),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypeDictionary {
        let mut dictionary = TypeDictionary::new();
        dictionary.insert("Outer.Inner", "m/pkg/Outer.Inner");
        dictionary.insert("Foo", "m/pkg/Foo");
        dictionary
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"Outer.Inner\": \"m/pkg/Outer.Inner\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact_is_sorted() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"Foo":"m/pkg/Foo","Outer.Inner":"m/pkg/Outer.Inner"}"#
        );
    }
}
