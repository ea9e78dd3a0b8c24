use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Discovered schema: table name -> table description.
///
/// Serialized as a JSON object. Tables keep the order in which the backend
/// listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseSchema {
    pub tables: Vec<(String, TableSchema)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default)]
    pub primary_key: Option<Vec<String>>,
    /// Heuristic labels such as "employee" or "salary"
    #[serde(default)]
    pub likely: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default, rename = "type")]
    pub data_type: Option<String>,
}

impl DatabaseSchema {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }
}

impl TableSchema {
    /// Column names joined with ", "
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_primary_key(&self, column: &str) -> bool {
        self.primary_key
            .as_ref()
            .is_some_and(|pk| pk.iter().any(|c| c == column))
    }
}

impl Serialize for DatabaseSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for (name, table) in &self.tables {
            map.serialize_entry(name, table)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DatabaseSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = DatabaseSchema;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of table name to table schema")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut tables = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, table)) = access.next_entry::<String, TableSchema>()? {
                    tables.push((name, table));
                }
                Ok(DatabaseSchema { tables })
            }
        }

        deserializer.deserialize_map(SchemaVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_connect_database::ConnectResponse;

    #[test]
    fn test_tables_keep_backend_order() {
        let json = r#"{
            "employees": {"columns": [{"name": "id", "type": "INTEGER"}, {"name": "name", "type": "VARCHAR"}], "primary_key": ["id"], "foreign_keys": [], "likely": ["employee"]},
            "departments": {"columns": [{"name": "id"}]}
        }"#;
        let schema: DatabaseSchema = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = schema.tables.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["employees", "departments"]);

        let employees = schema.table("employees").unwrap();
        assert_eq!(employees.column_list(), "id, name");
        assert!(employees.is_primary_key("id"));
        assert!(!employees.is_primary_key("name"));
        assert_eq!(employees.columns[0].data_type.as_deref(), Some("INTEGER"));
        assert_eq!(employees.likely, vec!["employee".to_string()]);

        let departments = schema.table("departments").unwrap();
        assert_eq!(departments.primary_key, None);
        assert!(departments.likely.is_empty());
    }

    #[test]
    fn test_serialize_keeps_order() {
        let schema = DatabaseSchema {
            tables: vec![
                ("b".to_string(), TableSchema::default()),
                ("a".to_string(), TableSchema::default()),
            ],
        };
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.find("\"b\"").unwrap() < json.find("\"a\"").unwrap());
    }

    #[test]
    fn test_response_without_schema() {
        let resp: ConnectResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert_eq!(resp.ok, Some(true));
        assert!(resp.schema.is_none());
    }
}
