//! Expressions that can appear in a SELECT list

use std::fmt::{self, Display};

use crate::schema::Column;

/// Aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    CountDistinct,
    Sum,
    Avg,
    Min,
    Max,
}

impl Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateFunction::Count | AggregateFunction::CountDistinct => write!(f, "COUNT"),
            AggregateFunction::Sum => write!(f, "SUM"),
            AggregateFunction::Avg => write!(f, "AVG"),
            AggregateFunction::Min => write!(f, "MIN"),
            AggregateFunction::Max => write!(f, "MAX"),
        }
    }
}

/// One selectable expression of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectFunction {
    /// Plain reference to a column
    Column {
        column: Column,
        alias: Option<String>,
    },
    Aggregate {
        function: AggregateFunction,
        column: Column,
        alias: Option<String>,
    },
    CountAll {
        alias: Option<String>,
    },
    Star,
}

impl SelectFunction {
    /// Reference `column` as-is
    pub fn column(column: Column) -> Self {
        Self::Column { column, alias: None }
    }

    /// COUNT(*)
    pub fn count() -> Self {
        Self::CountAll { alias: None }
    }

    pub fn count_column(column: Column) -> Self {
        Self::aggregate(AggregateFunction::Count, column)
    }

    pub fn count_distinct(column: Column) -> Self {
        Self::aggregate(AggregateFunction::CountDistinct, column)
    }

    pub fn sum(column: Column) -> Self {
        Self::aggregate(AggregateFunction::Sum, column)
    }

    pub fn avg(column: Column) -> Self {
        Self::aggregate(AggregateFunction::Avg, column)
    }

    pub fn min(column: Column) -> Self {
        Self::aggregate(AggregateFunction::Min, column)
    }

    pub fn max(column: Column) -> Self {
        Self::aggregate(AggregateFunction::Max, column)
    }

    fn aggregate(function: AggregateFunction, column: Column) -> Self {
        Self::Aggregate {
            function,
            column,
            alias: None,
        }
    }

    /// Attach an alias. `*` cannot be aliased and is returned unchanged.
    pub fn as_alias(mut self, alias: &str) -> Self {
        match &mut self {
            Self::Column { alias: slot, .. }
            | Self::Aggregate { alias: slot, .. }
            | Self::CountAll { alias: slot } => *slot = Some(alias.to_string()),
            Self::Star => {}
        }
        self
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Column { alias, .. } | Self::Aggregate { alias, .. } | Self::CountAll { alias } => {
                alias.as_deref()
            }
            Self::Star => None,
        }
    }

    /// The column this expression reads, if any
    pub fn source_column(&self) -> Option<&Column> {
        match self {
            Self::Column { column, .. } | Self::Aggregate { column, .. } => Some(column),
            Self::CountAll { .. } | Self::Star => None,
        }
    }

    /// Render the expression as it appears in the SELECT list
    pub fn to_sql(&self) -> String {
        let expr = match self {
            Self::Column { column, .. } => column.name.clone(),
            Self::Aggregate {
                function: AggregateFunction::CountDistinct,
                column,
                ..
            } => format!("COUNT(DISTINCT {})", column.name),
            Self::Aggregate {
                function, column, ..
            } => format!("{}({})", function, column.name),
            Self::CountAll { .. } => "COUNT(*)".to_string(),
            Self::Star => "*".to_string(),
        };

        match self.alias() {
            Some(alias) => format!("{} AS {}", expr, alias),
            None => expr,
        }
    }
}

impl From<Column> for SelectFunction {
    fn from(column: Column) -> Self {
        Self::column(column)
    }
}

/// Types that can be turned into an ordered SELECT list.
///
/// Columns become plain column references, one per column in input order;
/// select functions pass through untouched.
pub trait IntoSelectFunctions {
    fn into_select_functions(self) -> Vec<SelectFunction>;
}

fn wrap_columns<'a>(columns: impl ExactSizeIterator<Item = &'a Column>) -> Vec<SelectFunction> {
    let mut select_functions = Vec::with_capacity(columns.len());
    for column in columns {
        select_functions.push(SelectFunction::column(column.clone()));
    }
    select_functions
}

impl IntoSelectFunctions for Vec<SelectFunction> {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        self
    }
}

impl IntoSelectFunctions for &[SelectFunction] {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        self.to_vec()
    }
}

impl IntoSelectFunctions for &Vec<SelectFunction> {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        self.clone()
    }
}

impl<const N: usize> IntoSelectFunctions for [SelectFunction; N] {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        self.into()
    }
}

impl IntoSelectFunctions for SelectFunction {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        vec![self]
    }
}

impl IntoSelectFunctions for Vec<Column> {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        let mut select_functions = Vec::with_capacity(self.len());
        for column in self {
            select_functions.push(SelectFunction::column(column));
        }
        select_functions
    }
}

impl IntoSelectFunctions for &[Column] {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        wrap_columns(self.iter())
    }
}

impl IntoSelectFunctions for &Vec<Column> {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        wrap_columns(self.iter())
    }
}

impl<const N: usize> IntoSelectFunctions for [Column; N] {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        Vec::from(self).into_select_functions()
    }
}

impl IntoSelectFunctions for Column {
    fn into_select_functions(self) -> Vec<SelectFunction> {
        vec![SelectFunction::column(self)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn column(name: &str) -> Column {
        Column::new(name, ColumnType::Int)
    }

    #[test]
    fn test_column_reference_sql() {
        assert_eq!(SelectFunction::column(column("id")).to_sql(), "id");
        assert_eq!(
            SelectFunction::column(column("id")).as_alias("user_id").to_sql(),
            "id AS user_id"
        );
    }

    #[test]
    fn test_aggregate_sql() {
        assert_eq!(SelectFunction::sum(column("amount")).to_sql(), "SUM(amount)");
        assert_eq!(
            SelectFunction::count_distinct(column("user_id")).to_sql(),
            "COUNT(DISTINCT user_id)"
        );
        assert_eq!(
            SelectFunction::max(column("age")).as_alias("oldest").to_sql(),
            "MAX(age) AS oldest"
        );
    }

    #[test]
    fn test_count_all_and_star() {
        assert_eq!(SelectFunction::count().as_alias("total").to_sql(), "COUNT(*) AS total");
        assert_eq!(SelectFunction::Star.as_alias("ignored").to_sql(), "*");
        assert_eq!(SelectFunction::Star.alias(), None);
    }

    #[test]
    fn test_columns_wrap_in_order() {
        let functions = vec![column("id"), column("name")].into_select_functions();
        assert_eq!(
            functions,
            vec![
                SelectFunction::column(column("id")),
                SelectFunction::column(column("name")),
            ]
        );
    }

    #[test]
    fn test_slice_of_columns_is_copied() {
        let columns = [column("a"), column("b"), column("c")];
        let functions = (&columns[..]).into_select_functions();
        assert_eq!(functions.len(), columns.len());
        assert_eq!(functions[2].source_column(), Some(&columns[2]));
    }

    #[test]
    fn test_select_functions_pass_through() {
        let functions = [SelectFunction::count(), SelectFunction::avg(column("x"))];
        assert_eq!(functions.clone().into_select_functions(), functions.to_vec());
    }

    #[test]
    fn test_borrowed_vec_of_functions_is_copied() {
        let functions = vec![SelectFunction::count(), SelectFunction::Star];
        assert_eq!((&functions).into_select_functions(), functions);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(Vec::<Column>::new().into_select_functions().is_empty());
        assert!(Vec::<SelectFunction>::new().into_select_functions().is_empty());
    }
}
