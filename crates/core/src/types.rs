//! Typed records decoded from API response envelopes.
//!
//! Only the fields this client reads are named; everything else is kept in
//! an `extra` map so printed output matches what the server sent.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry of the `/kits` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KitSummary {
    /// `(key, value)` display pairs: `id` and `link`, then the remaining
    /// keys in the order the server sent them.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("id".to_owned(), self.id.clone())];
        if let Some(link) = &self.link {
            fields.push(("link".to_owned(), link.clone()));
        }
        fields.extend(
            self.extra
                .iter()
                .map(|(key, value)| (key.clone(), display_value(value))),
        );
        fields
    }
}

/// Response of `GET /kits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitList {
    pub kits: Vec<KitSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A family as attached to a kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitFamily {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full description of one kit.
///
/// Fields the server leaves out stay out when the detail is printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitDetail {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub families: Option<Vec<KitFamily>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{"kit": {...}}` envelope of detail and create responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitEnvelope {
    pub kit: KitDetail,
}

/// Result of a family slug lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{"family": {...}}` envelope of `GET /families/{slug}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FamilyEnvelope {
    #[serde(default)]
    pub family: Option<FamilyRef>,
}

/// Failure body: `{"errors": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A family to attach: resolved ID plus the variation spec passed through as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySelection {
    pub id: String,
    pub variations: Option<String>,
}

impl fmt::Display for FamilySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.variations.as_deref().unwrap_or_default())
    }
}

/// A `slug[:variations]` family argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySpec {
    pub slug: String,
    pub variations: Option<String>,
}

impl FamilySpec {
    /// Pair this spec's variations with a resolved family ID.
    pub fn resolved(&self, id: impl Into<String>) -> FamilySelection {
        FamilySelection {
            id: id.into(),
            variations: self.variations.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid family {0:?}: expected slug[:variations]")]
pub struct InvalidFamilySpec(pub String);

impl FromStr for FamilySpec {
    type Err = InvalidFamilySpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slug, variations) = match s.split_once(':') {
            Some((slug, rest)) => {
                // Anything after a second colon is dropped.
                let variations = rest.split(':').next().unwrap_or_default();
                (slug, (!variations.is_empty()).then(|| variations.to_owned()))
            }
            None => (s, None),
        };
        if slug.is_empty() {
            return Err(InvalidFamilySpec(s.to_owned()));
        }
        Ok(Self {
            slug: slug.to_owned(),
            variations,
        })
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_family_spec() {
        let spec: FamilySpec = "droid-sans:n4,i7".parse().unwrap();
        assert_eq!(spec.slug, "droid-sans");
        assert_eq!(spec.variations.as_deref(), Some("n4,i7"));
    }

    #[test]
    fn test_parse_family_spec_without_variations() {
        let spec: FamilySpec = "droid-sans".parse().unwrap();
        assert_eq!(spec.variations, None);

        let spec: FamilySpec = "droid-sans:".parse().unwrap();
        assert_eq!(spec.variations, None);
    }

    #[test]
    fn test_parse_family_spec_extra_colon() {
        let spec: FamilySpec = "droid-sans:n4:i7".parse().unwrap();
        assert_eq!(spec.variations.as_deref(), Some("n4"));
    }

    #[test]
    fn test_parse_family_spec_empty_slug() {
        assert!("".parse::<FamilySpec>().is_err());
        assert!(":n4".parse::<FamilySpec>().is_err());
    }

    #[test]
    fn test_family_selection_display() {
        let spec: FamilySpec = "droid-sans:n4".parse().unwrap();
        assert_eq!(spec.resolved("gkmg").to_string(), "gkmg:n4");
        let spec: FamilySpec = "droid-sans".parse().unwrap();
        assert_eq!(spec.resolved("gkmg").to_string(), "gkmg:");
    }

    #[test]
    fn test_kit_summary_fields_keep_unknown_keys() {
        let summary: KitSummary = serde_json::from_value(json!({
            "id": "abc1def",
            "link": "/api/v1/json/kits/abc1def",
            "state": "published"
        }))
        .unwrap();
        assert_eq!(
            summary.fields(),
            vec![
                ("id".to_owned(), "abc1def".to_owned()),
                ("link".to_owned(), "/api/v1/json/kits/abc1def".to_owned()),
                ("state".to_owned(), "published".to_owned()),
            ]
        );
    }

    #[test]
    fn test_kit_detail_roundtrips_extra_fields() {
        let value = json!({
            "id": "abc1def",
            "name": "My Kit",
            "analytics": false,
            "domains": ["example.com"],
            "families": [{"id": "gkmg", "name": "Droid Sans", "variations": ["n4"]}]
        });
        let detail: KitDetail = serde_json::from_value(value.clone()).unwrap();
        let families = detail.families.as_deref().unwrap();
        assert_eq!(families[0].variations.as_deref(), Some(&["n4".to_owned()][..]));
        assert_eq!(serde_json::to_value(&detail).unwrap(), value);
    }

    #[test]
    fn test_kit_detail_does_not_invent_fields() {
        let detail: KitDetail = serde_json::from_value(json!({"id": "abc1def"})).unwrap();
        assert_eq!(detail.name, None);
        assert_eq!(serde_json::to_string(&detail).unwrap(), r#"{"id":"abc1def"}"#);

        let family: KitFamily = serde_json::from_value(json!({"id": "gkmg"})).unwrap();
        assert_eq!(serde_json::to_string(&family).unwrap(), r#"{"id":"gkmg"}"#);
    }

    #[test]
    fn test_kit_summary_fields_keep_server_order() {
        let summary: KitSummary = serde_json::from_str(
            r#"{"id": "a", "link": "l", "zeta": "1", "alpha": "2", "count": 3}"#,
        )
        .unwrap();
        let keys: Vec<String> = summary.fields().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["id", "link", "zeta", "alpha", "count"]);
        assert_eq!(summary.fields()[4].1, "3");
    }
}
