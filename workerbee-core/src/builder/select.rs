//! SELECT query builder

use tracing::{debug, trace};

use super::common::{
    push_where_clause, require_name, require_table_name, IntoCondition, OrderByClause, QueryBuilder, SortDirection, WhereCondition,
    WhereConnector,
};
use crate::schema::{Column, Table};
use crate::select_function::SelectFunction;
use crate::{Error, Result, Value};

/// SELECT query over an ordered list of [`SelectFunction`]s.
///
/// The list is fixed at construction; everything else is added fluently.
/// An empty list selects `*`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    select_functions: Vec<SelectFunction>,
    from_table: Option<Table>,
    where_conditions: Vec<WhereCondition>,
    group_by_columns: Vec<String>,
    order_by_clauses: Vec<OrderByClause>,
    distinct: bool,
    limit_value: Option<u64>,
    offset_value: Option<u64>,
    parameters: Vec<Value>,
}

impl SelectQuery {
    pub fn new(select_functions: Vec<SelectFunction>) -> Self {
        Self {
            select_functions,
            from_table: None,
            where_conditions: Vec::new(),
            group_by_columns: Vec::new(),
            order_by_clauses: Vec::new(),
            distinct: false,
            limit_value: None,
            offset_value: None,
            parameters: Vec::new(),
        }
    }

    /// The SELECT list, in the order it was supplied
    pub fn select_functions(&self) -> &[SelectFunction] {
        &self.select_functions
    }

    /// The source table, once `from` has been called
    pub fn table(&self) -> Option<&Table> {
        self.from_table.as_ref()
    }

    /// Set the source table
    pub fn from(mut self, table: Table) -> Self {
        trace!(table = %table.qualified_name(), "select source set");
        self.from_table = Some(table);
        self
    }

    /// Add a WHERE condition
    ///
    /// # Examples
    /// ```
    /// use workerbee_core::{op, ColumnType, QueryBuilder, SelectQuery, Table};
    ///
    /// let users = Table::new("users").with_column("age", ColumnType::Int);
    /// let query = SelectQuery::new(vec![])
    ///     .from(users)
    ///     .where_(("age", op::GT, 18))
    ///     .where_(("name", "John"));
    ///
    /// assert_eq!(query.to_sql().unwrap(), "SELECT * FROM users WHERE age > ? AND name = ?");
    /// ```
    pub fn where_<C>(self, condition: C) -> Self
    where
        C: IntoCondition,
    {
        self.push_condition(condition, WhereConnector::And)
    }

    /// Add an OR WHERE condition
    pub fn or_where<C>(self, condition: C) -> Self
    where
        C: IntoCondition,
    {
        self.push_condition(condition, WhereConnector::Or)
    }

    /// Add an AND WHERE condition (same as where_)
    pub fn and_where<C>(self, condition: C) -> Self
    where
        C: IntoCondition,
    {
        self.where_(condition)
    }

    fn push_condition<C>(mut self, condition: C, connector: WhereConnector) -> Self
    where
        C: IntoCondition,
    {
        let (column, operator, value) = condition.into_condition();

        if !operator.is_unary() {
            self.parameters.push(value.clone());
        }
        self.where_conditions.push(WhereCondition {
            column,
            operator,
            value,
            connector,
        });

        self
    }

    /// Add columns to the GROUP BY clause
    pub fn group_by<'a, I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = &'a Column>,
    {
        self.group_by_columns
            .extend(columns.into_iter().map(|column| column.name.clone()));
        self
    }

    /// Add an ORDER BY clause
    pub fn order_by(mut self, column: &Column, direction: SortDirection) -> Self {
        self.order_by_clauses.push(OrderByClause {
            column: column.name.clone(),
            direction,
        });
        self
    }

    /// Add an ORDER BY ASC clause (convenience method)
    pub fn order_by_asc(self, column: &Column) -> Self {
        self.order_by(column, SortDirection::Asc)
    }

    /// Add an ORDER BY DESC clause (convenience method)
    pub fn order_by_desc(self, column: &Column) -> Self {
        self.order_by(column, SortDirection::Desc)
    }

    fn validate_names(&self, table: &Table) -> Result<()> {
        require_table_name(table)?;

        for column in self.select_functions.iter().filter_map(SelectFunction::source_column) {
            require_name("Column", &column.name)?;
        }
        for condition in &self.where_conditions {
            require_name("Column", &condition.column)?;
        }
        for column in &self.group_by_columns {
            require_name("Column", column)?;
        }
        for clause in &self.order_by_clauses {
            require_name("Column", &clause.column)?;
        }
        Ok(())
    }

    /// Mark the query as DISTINCT
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Add a LIMIT clause
    pub fn limit(mut self, count: u64) -> Self {
        self.limit_value = Some(count);
        self
    }

    /// Add an OFFSET clause
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset_value = Some(offset);
        self
    }
}

impl QueryBuilder for SelectQuery {
    fn to_sql(&self) -> Result<String> {
        let table = self
            .from_table
            .as_ref()
            .ok_or_else(|| Error::invalid_query("SELECT requires a source table, call .from()"))?;
        self.validate_names(table)?;

        let mut sql = String::from("SELECT ");

        if self.distinct {
            sql.push_str("DISTINCT ");
        }

        if self.select_functions.is_empty() {
            sql.push('*');
        } else {
            let parts: Vec<String> = self
                .select_functions
                .iter()
                .map(SelectFunction::to_sql)
                .collect();
            sql.push_str(&parts.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&table.qualified_name());

        push_where_clause(&mut sql, &self.where_conditions);

        if !self.group_by_columns.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by_columns.join(", "));
        }

        if !self.order_by_clauses.is_empty() {
            sql.push_str(" ORDER BY ");
            let order_parts: Vec<String> = self
                .order_by_clauses
                .iter()
                .map(|clause| format!("{} {}", clause.column, clause.direction))
                .collect();
            sql.push_str(&order_parts.join(", "));
        }

        if let Some(limit) = self.limit_value {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset_value {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        debug!(sql = %sql, parameters = self.parameters.len(), "generated SELECT");
        Ok(sql)
    }

    fn parameters(&self) -> &[Value] {
        &self.parameters
    }
}
