//! WorkerBee - typed query generation for Rust
//!
//! Entry points for turning schema descriptors into builders:
//!
//! - [`create`] takes a [`Database`] or a [`Table`] and returns the matching
//!   `CREATE` builder.
//! - [`select`] takes columns or pre-built [`SelectFunction`]s and returns a
//!   [`SelectQuery`].
//!
//! ```
//! use workerbee::{create, select, ColumnType, Database, QueryBuilder, Table};
//!
//! let sales = Database::new("sales");
//! let orders = Table::new("orders")
//!     .in_database(&sales)
//!     .with_column("id", ColumnType::BigInt)
//!     .with_column("total", ColumnType::Double);
//!
//! let ddl = create(orders.clone()).if_not_exists().to_sql().unwrap();
//! assert_eq!(ddl, "CREATE TABLE IF NOT EXISTS sales.orders (id BIGINT, total DOUBLE)");
//!
//! let query = select(&orders.columns).from(orders).limit(5);
//! assert_eq!(query.to_sql().unwrap(), "SELECT id, total FROM sales.orders LIMIT 5");
//! ```

pub use workerbee_core::builder;
pub use workerbee_core::builder::common::OrderByClause;
pub use workerbee_core::{
    op, AggregateFunction, Column, ColumnType, Database, DatabaseCreator, Error, IntoCondition,
    IntoOperator, IntoSelectFunctions, Operator, QueryBuilder, Result, SelectFunction,
    SelectQuery, SortDirection, Table, TableCreator, Value, WhereCondition, WhereConnector,
};

/// Descriptors that have a `CREATE` builder
pub trait Creatable {
    type Creator;

    fn into_creator(self) -> Self::Creator;
}

impl Creatable for Database {
    type Creator = DatabaseCreator;

    fn into_creator(self) -> DatabaseCreator {
        DatabaseCreator::new(self)
    }
}

impl Creatable for Table {
    type Creator = TableCreator;

    fn into_creator(self) -> TableCreator {
        TableCreator::new(self)
    }
}

/// Start a `CREATE DATABASE` or `CREATE TABLE` builder.
///
/// The descriptor is handed to the builder unchanged; nothing is checked
/// until the statement is generated.
pub fn create<T: Creatable>(target: T) -> T::Creator {
    target.into_creator()
}

/// Start a SELECT query.
///
/// Columns are wrapped as plain column references, one per column in the
/// order given. Select functions are used as they are. An empty list is
/// allowed and selects `*`.
///
/// # Examples
///
/// ```
/// use workerbee::{col, select, QueryBuilder, SelectFunction, Table};
///
/// let by_column = select([col("id"), col("name")]).from(Table::new("users"));
/// assert_eq!(by_column.to_sql().unwrap(), "SELECT id, name FROM users");
///
/// let by_function = select([SelectFunction::count().as_alias("n")]).from(Table::new("users"));
/// assert_eq!(by_function.to_sql().unwrap(), "SELECT COUNT(*) AS n FROM users");
/// ```
pub fn select<S: IntoSelectFunctions>(items: S) -> SelectQuery {
    SelectQuery::new(items.into_select_functions())
}

/// Create a standalone column, typed as `STRING`
pub fn col(name: &str) -> Column {
    Column::new(name, ColumnType::String)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dispatches_on_descriptor() {
        let database_creator: DatabaseCreator = create(Database::new("sales"));
        let table_creator: TableCreator = create(Table::new("orders"));

        assert_eq!(database_creator.database().name, "sales");
        assert_eq!(table_creator.table().name, "orders");
    }

    #[test]
    fn test_col_is_untyped_string() {
        let column = col("email");
        assert_eq!(column.name, "email");
        assert_eq!(column.data_type, ColumnType::String);
        assert_eq!(column.table, None);
    }
}
