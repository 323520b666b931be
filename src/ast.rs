use std::fmt;

use crate::util::num::format_real;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node owns its children, so a tree is finite and acyclic by
/// construction. Each variant records the byte offset of the literal or
/// operator it was built from, for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// A prefix operation (`+x` or `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Creates a numeric literal node.
    #[must_use]
    pub const fn number(value: f64, position: usize) -> Self {
        Self::Number { value, position }
    }

    /// Creates a binary operation node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Creates a unary operation node around an operand.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self, position: usize) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr),
                        position }
    }

    /// Returns the number of levels in the tree. A literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::UnaryOp { expr, .. } => 1 + expr.depth(),
        }
    }
}

/// Renders the tree fully parenthesised, e.g. `((1-2)-3)` or `(-5)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{}", format_real(*value)),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left}{op}{right})"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
        }
    }
}

/// Operators that take two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// Operators that take a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`, the identity.
    Plus,
    /// `-x`
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Plus => "+",
                        Self::Negate => "-",
                    })
    }
}
