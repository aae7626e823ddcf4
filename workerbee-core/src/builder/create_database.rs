//! CREATE DATABASE builder

use tracing::debug;

use super::common::{quote_literal, require_name, QueryBuilder};
use crate::schema::Database;
use crate::{Result, Value};

/// Builds a `CREATE DATABASE` statement for a [`Database`] descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseCreator {
    database: Database,
    if_not_exists: bool,
}

impl DatabaseCreator {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            if_not_exists: false,
        }
    }

    /// The descriptor this creator was built from
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Emit `IF NOT EXISTS`
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

impl QueryBuilder for DatabaseCreator {
    fn to_sql(&self) -> Result<String> {
        require_name("Database", &self.database.name)?;

        let mut sql = String::from("CREATE DATABASE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.database.name);

        if let Some(comment) = &self.database.comment {
            sql.push_str(" COMMENT ");
            sql.push_str(&quote_literal(comment)?);
        }

        if let Some(location) = &self.database.location {
            sql.push_str(" LOCATION ");
            sql.push_str(&quote_literal(location)?);
        }

        if !self.database.properties.is_empty() {
            let properties = self
                .database
                .properties
                .iter()
                .map(|(key, value)| -> Result<String> {
                    Ok(format!("{}={}", quote_literal(key)?, quote_literal(value)?))
                })
                .collect::<Result<Vec<_>>>()?;
            sql.push_str(" WITH DBPROPERTIES (");
            sql.push_str(&properties.join(", "));
            sql.push(')');
        }

        debug!(database = %self.database.name, sql = %sql, "generated CREATE DATABASE");
        Ok(sql)
    }

    fn parameters(&self) -> &[Value] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_create_database() {
        let creator = DatabaseCreator::new(Database::new("sales"));
        assert_eq!(creator.to_sql().unwrap(), "CREATE DATABASE sales");
        assert!(creator.parameters().is_empty());
    }

    #[test]
    fn test_create_database_if_not_exists() {
        let creator = DatabaseCreator::new(Database::new("sales")).if_not_exists();
        assert_eq!(creator.to_sql().unwrap(), "CREATE DATABASE IF NOT EXISTS sales");
    }

    #[test]
    fn test_create_database_with_all_clauses() {
        let database = Database::new("sales")
            .with_comment("Analyst's copy")
            .with_location("/warehouse/sales")
            .with_property("team", "bi")
            .with_property("creator", "etl");

        let sql = DatabaseCreator::new(database).to_sql().unwrap();
        assert_eq!(
            sql,
            "CREATE DATABASE sales COMMENT 'Analyst''s copy' LOCATION '/warehouse/sales' \
             WITH DBPROPERTIES ('creator'='etl', 'team'='bi')"
        );
    }

    #[test]
    fn test_creator_keeps_descriptor() {
        let database = Database::new("sales").with_comment("c");
        let creator = DatabaseCreator::new(database.clone());
        assert_eq!(creator.database(), &database);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = DatabaseCreator::new(Database::new("")).to_sql().unwrap_err();
        assert!(matches!(err, Error::InvalidQuery { .. }));
    }

    #[test]
    fn test_name_with_space_is_rejected() {
        let err = DatabaseCreator::new(Database::new("a b")).to_sql().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid query: Database name 'a b' is not a valid identifier"
        );
    }
}
