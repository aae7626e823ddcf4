//! Pieces shared by the builders

use crate::schema::{Column, Table};
use crate::{Error, IntoOperator, Operator, Result, Value};

/// Core trait for all query builders
pub trait QueryBuilder {
    /// Generate the SQL statement
    fn to_sql(&self) -> Result<String>;

    /// Values bound to the statement's `?` placeholders, in order
    fn parameters(&self) -> &[Value];
}

/// Trait for conditions that can be used in WHERE clauses
pub trait IntoCondition {
    fn into_condition(self) -> (String, Operator, Value);
}

// Shorthand equality: where_(("age", 18))
impl<T> IntoCondition for (&str, T)
where
    T: Into<Value>,
{
    fn into_condition(self) -> (String, Operator, Value) {
        (self.0.to_string(), Operator::EQ, self.1.into())
    }
}

// Explicit operators: where_(("age", op::GT, 18)) or where_(("age", ">", 18))
impl<T, O> IntoCondition for (&str, O, T)
where
    T: Into<Value>,
    O: IntoOperator,
{
    fn into_condition(self) -> (String, Operator, Value) {
        (self.0.to_string(), self.1.into_operator(), self.2.into())
    }
}

impl<T> IntoCondition for (&Column, T)
where
    T: Into<Value>,
{
    fn into_condition(self) -> (String, Operator, Value) {
        (self.0.name.clone(), Operator::EQ, self.1.into())
    }
}

impl<T, O> IntoCondition for (&Column, O, T)
where
    T: Into<Value>,
    O: IntoOperator,
{
    fn into_condition(self) -> (String, Operator, Value) {
        (self.0.name.clone(), self.1.into_operator(), self.2.into())
    }
}

/// A WHERE condition
#[derive(Debug, Clone, PartialEq)]
pub struct WhereCondition {
    pub column: String,
    pub operator: Operator,
    pub value: Value,
    pub connector: WhereConnector,
}

/// How WHERE conditions are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhereConnector {
    And,
    Or,
}

/// Sort direction for ORDER BY clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    pub column: String,
    pub direction: SortDirection,
}

/// Quote a string literal, doubling embedded single quotes
pub(crate) fn quote_literal(text: &str) -> Result<String> {
    if text.contains('\0') {
        return Err(Error::sql_generation(
            "string literal cannot contain NUL character",
        ));
    }
    Ok(format!("'{}'", text.replace('\'', "''")))
}

/// Check that `name` is a plain identifier: `[A-Za-z_][A-Za-z0-9_$]*`
pub(crate) fn require_name(kind: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        None => {
            return Err(Error::invalid_query(format!("{} name cannot be empty", kind)));
        }
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
    };

    if !valid {
        return Err(Error::invalid_query(format!(
            "{} name '{}' is not a valid identifier",
            kind,
            name.escape_default()
        )));
    }
    Ok(())
}

/// Check the table name and, when present, its database name
pub(crate) fn require_table_name(table: &Table) -> Result<()> {
    if let Some(database) = &table.database {
        require_name("Database", database)?;
    }
    require_name("Table", &table.name)
}

/// Append ` WHERE ...` for `conditions`, if any
pub(crate) fn push_where_clause(sql: &mut String, conditions: &[WhereCondition]) {
    if conditions.is_empty() {
        return;
    }

    sql.push_str(" WHERE ");

    for (i, condition) in conditions.iter().enumerate() {
        if i > 0 {
            match condition.connector {
                WhereConnector::And => sql.push_str(" AND "),
                WhereConnector::Or => sql.push_str(" OR "),
            }
        }

        sql.push_str(&condition.column);
        sql.push(' ');
        sql.push_str(condition.operator.as_str());

        if condition.operator.is_unary() {
            continue;
        }

        sql.push(' ');
        sql.push_str(condition.value.placeholder());
    }
}
