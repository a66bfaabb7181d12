//! Filter conditions in their three accepted shapes

use serde::{Deserialize, Serialize};

/// Acceptable values per attribute; absent keys do not filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encodings: Option<Vec<String>>,
    #[serde(alias = "magic", skip_serializing_if = "Option::is_none")]
    pub content_types: Option<Vec<String>>,
}

impl CategoryConditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extensions<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn encodings<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.encodings = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn content_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_types = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_none() && self.encodings.is_none() && self.content_types.is_none()
    }
}

/// What a caller asked `apply_filters` to select
///
/// Deserializes from a JSON/YAML mapping, a list of strings, or a single
/// string; a single string becomes a one-element [`Conditions::Unlabeled`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConditions")]
pub enum Conditions {
    /// Values labelled with the attribute they constrain
    ByCategory(CategoryConditions),
    /// Values whose attribute must be inferred from the catalog
    Unlabeled(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConditions {
    Single(String),
    List(Vec<String>),
    Mapping(CategoryConditions),
}

impl From<RawConditions> for Conditions {
    fn from(raw: RawConditions) -> Self {
        match raw {
            RawConditions::Single(value) => Conditions::Unlabeled(vec![value]),
            RawConditions::List(values) => Conditions::Unlabeled(values),
            RawConditions::Mapping(categories) => Conditions::ByCategory(categories),
        }
    }
}

impl From<CategoryConditions> for Conditions {
    fn from(categories: CategoryConditions) -> Self {
        Conditions::ByCategory(categories)
    }
}

impl From<&str> for Conditions {
    fn from(value: &str) -> Self {
        Conditions::Unlabeled(vec![value.to_string()])
    }
}

impl From<String> for Conditions {
    fn from(value: String) -> Self {
        Conditions::Unlabeled(vec![value])
    }
}

impl From<Vec<String>> for Conditions {
    fn from(values: Vec<String>) -> Self {
        Conditions::Unlabeled(values)
    }
}

impl From<Vec<&str>> for Conditions {
    fn from(values: Vec<&str>) -> Self {
        Conditions::Unlabeled(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Conditions {
    fn from(values: [&str; N]) -> Self {
        Conditions::Unlabeled(values.iter().map(|v| v.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_single_string() {
        let conditions: Conditions = serde_json::from_str(r#""utf-8""#).unwrap();
        assert_eq!(conditions, Conditions::Unlabeled(vec!["utf-8".into()]));
    }

    #[test]
    fn deserialize_list() {
        let conditions: Conditions = serde_json::from_str(r#"[".cpp", ".h"]"#).unwrap();
        assert_eq!(conditions, Conditions::from([".cpp", ".h"]));
    }

    #[test]
    fn deserialize_mapping() {
        let conditions: Conditions =
            serde_json::from_str(r#"{"extensions": [".cpp"], "encodings": ["utf-8"]}"#).unwrap();
        assert_eq!(
            conditions,
            Conditions::ByCategory(
                CategoryConditions::new()
                    .extensions([".cpp"])
                    .encodings(["utf-8"])
            )
        );
    }

    #[test]
    fn magic_is_an_alias_for_content_types() {
        let conditions: Conditions =
            serde_json::from_str(r#"{"magic": ["text/plain"]}"#).unwrap();
        assert_eq!(
            conditions,
            Conditions::ByCategory(CategoryConditions::new().content_types(["text/plain"]))
        );
    }

    #[test]
    fn deserialize_yaml_mapping() {
        let conditions: Conditions =
            serde_yml::from_str("content_types:\n  - image/png\n").unwrap();
        assert_eq!(
            conditions,
            Conditions::ByCategory(CategoryConditions::new().content_types(["image/png"]))
        );
    }

    #[test]
    fn numbers_are_rejected() {
        assert!(serde_json::from_str::<Conditions>("42").is_err());
    }

    #[test]
    fn string_conversions_are_unlabeled() {
        assert_eq!(Conditions::from("x"), Conditions::Unlabeled(vec!["x".into()]));
        assert_eq!(
            Conditions::from(vec!["a", "b"]),
            Conditions::Unlabeled(vec!["a".into(), "b".into()])
        );
    }
}
