use serde::{Deserialize, Serialize};

/// A persisted soil-testing entry: one stage name and its ordered descriptions.
///
/// The identifier is assigned by the persistence layer on creation and travels
/// over the wire as `_id`, the field name the admin panel has always consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilTest {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_underscore_id_and_missing_descriptions() {
        let soil: SoilTest =
            serde_json::from_str(r#"{"_id":"abc","name":"चरण 1"}"#).unwrap();
        assert_eq!(soil.id, "abc");
        assert_eq!(soil.name, "चरण 1");
        assert!(soil.descriptions.is_empty());
    }

    #[test]
    fn writes_underscore_id() {
        let soil = SoilTest {
            id: "42".to_string(),
            name: "stage".to_string(),
            descriptions: vec!["d1".to_string()],
        };
        let json = serde_json::to_value(&soil).unwrap();
        assert_eq!(json["_id"], "42");
        assert_eq!(json["descriptions"][0], "d1");
    }
}
