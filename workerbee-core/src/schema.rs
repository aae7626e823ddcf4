//! Schema descriptors: databases, tables and columns
//!
//! Descriptors are plain data. They can be built fluently or loaded from
//! JSON, e.g. a table definition kept next to the job that populates it:
//!
//! ```
//! use workerbee_core::{ColumnType, Table};
//!
//! let table = Table::from_json(r#"{
//!     "database": "sales",
//!     "name": "orders",
//!     "columns": [
//!         { "name": "id", "data_type": "BIGINT" },
//!         { "name": "note", "data_type": { "VARCHAR": 255 } }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(table.qualified_name(), "sales.orders");
//! assert_eq!(table.columns[1].data_type, ColumnType::Varchar(255));
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Column data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal { precision: u8, scale: u8 },
    #[default]
    String,
    Varchar(u32),
    Char(u32),
    Binary,
    Date,
    Timestamp,
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::TinyInt => write!(f, "TINYINT"),
            ColumnType::SmallInt => write!(f, "SMALLINT"),
            ColumnType::Int => write!(f, "INT"),
            ColumnType::BigInt => write!(f, "BIGINT"),
            ColumnType::Float => write!(f, "FLOAT"),
            ColumnType::Double => write!(f, "DOUBLE"),
            ColumnType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({},{})", precision, scale)
            }
            ColumnType::String => write!(f, "STRING"),
            ColumnType::Varchar(len) => write!(f, "VARCHAR({})", len),
            ColumnType::Char(len) => write!(f, "CHAR({})", len),
            ColumnType::Binary => write!(f, "BINARY"),
            ColumnType::Date => write!(f, "DATE"),
            ColumnType::Timestamp => write!(f, "TIMESTAMP"),
        }
    }
}

/// A database descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            location: None,
            properties: BTreeMap::new(),
        }
    }

    /// Load a descriptor from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add a `DBPROPERTIES` entry; a repeated key replaces the earlier value
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A table descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            database: None,
            name: name.into(),
            columns: Vec::new(),
            comment: None,
        }
    }

    /// Load a descriptor from JSON. Columns without an owning table are
    /// attached to this one.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut table: Table = serde_json::from_str(json)?;
        for column in &mut table.columns {
            if column.table.is_none() {
                column.table = Some(table.name.clone());
            }
        }
        Ok(table)
    }

    /// Place the table inside `database`
    pub fn in_database(mut self, database: &Database) -> Self {
        self.database = Some(database.name.clone());
        self
    }

    /// Append a column owned by this table
    pub fn with_column(mut self, name: impl Into<String>, data_type: ColumnType) -> Self {
        let column = Column::new(name, data_type).of_table(&self.name);
        self.columns.push(column);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// `database.table` when the table belongs to a database, else the bare name
    pub fn qualified_name(&self) -> String {
        match &self.database {
            Some(database) => format!("{}.{}", database, self.name),
            None => self.name.clone(),
        }
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| Error::column_not_found(&self.name, name))
    }
}

/// A column descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub name: String,
    #[serde(default)]
    pub data_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            table: None,
            name: name.into(),
            data_type,
            comment: None,
        }
    }

    pub fn of_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// `table.column` when the owning table is known, else the bare name
    pub fn qualified_name(&self) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", table, self.name),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::BigInt.to_string(), "BIGINT");
        assert_eq!(ColumnType::Varchar(64).to_string(), "VARCHAR(64)");
        assert_eq!(
            ColumnType::Decimal { precision: 10, scale: 2 }.to_string(),
            "DECIMAL(10,2)"
        );
    }

    #[test]
    fn test_table_columns_are_owned() {
        let table = Table::new("users")
            .with_column("id", ColumnType::BigInt)
            .with_column("name", ColumnType::String);

        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].qualified_name(), "users.id");
        assert_eq!(table.columns[1].table.as_deref(), Some("users"));
    }

    #[test]
    fn test_qualified_table_name() {
        let db = Database::new("sales");
        assert_eq!(Table::new("orders").qualified_name(), "orders");
        assert_eq!(Table::new("orders").in_database(&db).qualified_name(), "sales.orders");
    }

    #[test]
    fn test_column_lookup() {
        let table = Table::new("users").with_column("id", ColumnType::Int);
        assert_eq!(table.column("id").unwrap().data_type, ColumnType::Int);

        let err = table.column("email").unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { .. }));
    }

    #[test]
    fn test_database_properties_replace() {
        let db = Database::new("sales")
            .with_property("owner", "alice")
            .with_property("owner", "bob");
        assert_eq!(db.properties.len(), 1);
        assert_eq!(db.properties["owner"], "bob");
    }

    #[test]
    fn test_database_from_json() {
        let db = Database::from_json(
            r#"{ "name": "sales", "comment": "Sales data", "properties": { "team": "bi" } }"#,
        )
        .unwrap();
        assert_eq!(db.name, "sales");
        assert_eq!(db.comment.as_deref(), Some("Sales data"));
        assert_eq!(db.location, None);
        assert_eq!(db.properties["team"], "bi");
    }

    #[test]
    fn test_table_from_json_attaches_columns() {
        let table = Table::from_json(
            r#"{ "name": "users", "columns": [
                { "name": "id", "data_type": "INT" },
                { "name": "score", "data_type": { "DECIMAL": { "precision": 5, "scale": 1 } } },
                { "name": "tag" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(table.columns[0].qualified_name(), "users.id");
        assert_eq!(
            table.columns[1].data_type,
            ColumnType::Decimal { precision: 5, scale: 1 }
        );
        assert_eq!(table.columns[2].data_type, ColumnType::String);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = Table::from_json(r#"{ "columns": [] }"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
