//! CREATE TABLE builder

use tracing::debug;

use super::common::{quote_literal, require_name, require_table_name, QueryBuilder};
use crate::schema::Table;
use crate::{Error, Result, Value};

/// Builds a `CREATE TABLE` statement for a [`Table`] descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct TableCreator {
    table: Table,
    if_not_exists: bool,
}

impl TableCreator {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            if_not_exists: false,
        }
    }

    /// The descriptor this creator was built from
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Emit `IF NOT EXISTS`
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

impl QueryBuilder for TableCreator {
    fn to_sql(&self) -> Result<String> {
        require_table_name(&self.table)?;
        if self.table.columns.is_empty() {
            return Err(Error::invalid_query(format!(
                "CREATE TABLE {} requires at least one column",
                self.table.name
            )));
        }

        let mut column_parts = Vec::with_capacity(self.table.columns.len());
        for column in &self.table.columns {
            require_name("Column", &column.name)?;
            let mut part = format!("{} {}", column.name, column.data_type);
            if let Some(comment) = &column.comment {
                part.push_str(" COMMENT ");
                part.push_str(&quote_literal(comment)?);
            }
            column_parts.push(part);
        }

        let mut sql = String::from("CREATE TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.table.qualified_name());
        sql.push_str(" (");
        sql.push_str(&column_parts.join(", "));
        sql.push(')');

        if let Some(comment) = &self.table.comment {
            sql.push_str(" COMMENT ");
            sql.push_str(&quote_literal(comment)?);
        }

        debug!(table = %self.table.qualified_name(), sql = %sql, "generated CREATE TABLE");
        Ok(sql)
    }

    fn parameters(&self) -> &[Value] {
        &[]
    }
}
