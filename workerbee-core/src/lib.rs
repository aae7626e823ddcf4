//! WorkerBee Core - schema descriptors and query builders
//!
//! Describe databases, tables and columns as plain data, then hand them to a
//! builder to generate the matching statement.

pub mod builder;
pub mod error;
pub mod operator;
pub mod schema;
pub mod select_function;
pub mod value;

// Re-export main types
pub use builder::{
    DatabaseCreator, IntoCondition, QueryBuilder, SelectQuery, SortDirection, TableCreator,
    WhereCondition, WhereConnector,
};
pub use error::{Error, Result};
pub use operator::{op, IntoOperator, Operator};
pub use schema::{Column, ColumnType, Database, Table};
pub use select_function::{AggregateFunction, IntoSelectFunctions, SelectFunction};
pub use value::Value;
