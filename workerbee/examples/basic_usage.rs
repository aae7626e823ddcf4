use tracing::info;
use tracing_subscriber::EnvFilter;
use workerbee::{create, op, select, ColumnType, Database, QueryBuilder, SelectFunction, Table};

fn main() -> workerbee::Result<()> {
    // RUST_LOG=workerbee_core=debug shows every generated statement
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sales = Database::new("sales")
        .with_comment("Order history")
        .with_property("owner", "analytics");

    let orders = Table::new("orders")
        .in_database(&sales)
        .with_column("id", ColumnType::BigInt)
        .with_column("customer", ColumnType::Varchar(64))
        .with_column("total", ColumnType::Decimal { precision: 12, scale: 2 })
        .with_comment("One row per order");

    info!("{}", create(sales).if_not_exists().to_sql()?);
    info!("{}", create(orders.clone()).if_not_exists().to_sql()?);

    let customer = orders.column("customer")?.clone();
    let total = orders.column("total")?.clone();

    // Plain column selection
    let recent = select(&orders.columns)
        .from(orders.clone())
        .where_((&total, op::GT, 100.0))
        .order_by_desc(&total)
        .limit(10);
    info!("{} -- {:?}", recent.to_sql()?, recent.parameters());

    // Aggregates
    let per_customer = select(vec![
        SelectFunction::column(customer.clone()),
        SelectFunction::count().as_alias("orders"),
        SelectFunction::sum(total).as_alias("spent"),
    ])
    .from(orders)
    .group_by([&customer]);
    info!("{}", per_customer.to_sql()?);

    Ok(())
}
