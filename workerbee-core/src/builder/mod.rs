//! Query builders

pub mod common;
pub mod create_database;
pub mod create_table;
pub mod select;

pub use common::{
    IntoCondition, OrderByClause, QueryBuilder, SortDirection, WhereCondition, WhereConnector,
};
pub use create_database::DatabaseCreator;
pub use create_table::TableCreator;
pub use select::SelectQuery;
