//! Comparison operators for WHERE conditions

use std::fmt::{self, Display};

/// A SQL comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator(&'static str);

impl Operator {
    pub const EQ: Self = Operator("=");
    pub const NEQ: Self = Operator("!=");
    pub const GT: Self = Operator(">");
    pub const GTE: Self = Operator(">=");
    pub const LT: Self = Operator("<");
    pub const LTE: Self = Operator("<=");
    pub const LIKE: Self = Operator("LIKE");
    pub const IN: Self = Operator("IN");
    pub const NOT_IN: Self = Operator("NOT IN");
    pub const IS_NULL: Self = Operator("IS NULL");
    pub const IS_NOT_NULL: Self = Operator("IS NOT NULL");

    /// Create a custom operator, e.g. Hive's `RLIKE`
    ///
    /// # Examples
    /// ```
    /// use workerbee_core::Operator;
    ///
    /// let rlike = Operator::custom("RLIKE");
    /// assert_eq!(rlike.as_str(), "RLIKE");
    /// ```
    pub const fn custom(op: &'static str) -> Self {
        Operator(op)
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether the operator stands alone without a right-hand operand
    pub fn is_unary(&self) -> bool {
        *self == Self::IS_NULL || *self == Self::IS_NOT_NULL
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Trait for types that can be converted to SQL operators
pub trait IntoOperator {
    fn into_operator(self) -> Operator;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> Operator {
        self
    }
}

/// String spellings of the common operators map onto the constants; anything
/// else is passed through as a custom operator.
impl IntoOperator for &'static str {
    fn into_operator(self) -> Operator {
        match self {
            "=" => Operator::EQ,
            "!=" | "<>" => Operator::NEQ,
            ">" => Operator::GT,
            ">=" => Operator::GTE,
            "<" => Operator::LT,
            "<=" => Operator::LTE,
            "LIKE" | "like" => Operator::LIKE,
            "IN" | "in" => Operator::IN,
            "NOT IN" | "not in" => Operator::NOT_IN,
            "IS NULL" | "is null" => Operator::IS_NULL,
            "IS NOT NULL" | "is not null" => Operator::IS_NOT_NULL,
            other => Operator::custom(other),
        }
    }
}

/// Convenience module for operator constants
pub mod op {
    use super::Operator;

    pub const EQ: Operator = Operator::EQ;
    pub const NEQ: Operator = Operator::NEQ;
    pub const GT: Operator = Operator::GT;
    pub const GTE: Operator = Operator::GTE;
    pub const LT: Operator = Operator::LT;
    pub const LTE: Operator = Operator::LTE;
    pub const LIKE: Operator = Operator::LIKE;
    pub const IN: Operator = Operator::IN;
    pub const NOT_IN: Operator = Operator::NOT_IN;
    pub const IS_NULL: Operator = Operator::IS_NULL;
    pub const IS_NOT_NULL: Operator = Operator::IS_NOT_NULL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_constants() {
        assert_eq!(Operator::GT.as_str(), ">");
        assert_eq!(Operator::EQ.as_str(), "=");
        assert_eq!(Operator::NOT_IN.as_str(), "NOT IN");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Operator::GTE), ">=");
        assert_eq!(format!("{}", op::LIKE), "LIKE");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(">".into_operator(), Operator::GT);
        assert_eq!("like".into_operator(), Operator::LIKE);
        assert_eq!("<>".into_operator(), Operator::NEQ);
        assert_eq!("is not null".into_operator(), Operator::IS_NOT_NULL);
    }

    #[test]
    fn test_unknown_string_is_custom() {
        assert_eq!("RLIKE".into_operator(), Operator::custom("RLIKE"));
    }

    #[test]
    fn test_unary_operators() {
        assert!(Operator::IS_NULL.is_unary());
        assert!(Operator::IS_NOT_NULL.is_unary());
        assert!(!Operator::EQ.is_unary());
    }
}
