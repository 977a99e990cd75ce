use alloc::boxed::Box;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Remainder,
    Add,
    Subtract,
    LogicalAnd,
    LogicalOr,
    Equals,
    NotEquals,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl BinaryOp {
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            BinaryOp::Multiply => left.wrapping_mul(right),
            // Division by zero and MIN / -1 have no defined result; both yield 0.
            BinaryOp::Divide => left.checked_div(right).unwrap_or(0),
            BinaryOp::Remainder => left.checked_rem(right).unwrap_or(0),
            BinaryOp::Add => left.wrapping_add(right),
            BinaryOp::Subtract => left.wrapping_sub(right),
            BinaryOp::LogicalAnd => i64::from(left != 0 && right != 0),
            BinaryOp::LogicalOr => i64::from(left != 0 || right != 0),
            BinaryOp::Equals => i64::from(left == right),
            BinaryOp::NotEquals => i64::from(left != right),
            BinaryOp::Less => i64::from(left < right),
            BinaryOp::LessOrEqual => i64::from(left <= right),
            BinaryOp::Greater => i64::from(left > right),
            BinaryOp::GreaterOrEqual => i64::from(left >= right),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Remainder => "%",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessOrEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterOrEqual => ">=",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PluralExpr {
    Constant(i64),
    Variable,
    Binary {
        op: BinaryOp,
        left: Box<PluralExpr>,
        right: Box<PluralExpr>,
    },
    Ternary {
        condition: Box<PluralExpr>,
        then: Box<PluralExpr>,
        otherwise: Box<PluralExpr>,
    },
}

impl PluralExpr {
    pub fn binary(op: BinaryOp, left: PluralExpr, right: PluralExpr) -> Self {
        PluralExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ternary(condition: PluralExpr, then: PluralExpr, otherwise: PluralExpr) -> Self {
        PluralExpr::Ternary {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn germanic() -> Self {
        PluralExpr::binary(
            BinaryOp::NotEquals,
            PluralExpr::Variable,
            PluralExpr::Constant(1),
        )
    }

    pub fn eval(&self, n: i64) -> i64 {
        match self {
            PluralExpr::Constant(value) => *value,
            PluralExpr::Variable => n,
            PluralExpr::Binary { op, left, right } => {
                // Both operands are always evaluated; && and || do not short-circuit.
                op.apply(left.eval(n), right.eval(n))
            }
            PluralExpr::Ternary {
                condition,
                then,
                otherwise,
            } => {
                if condition.eval(n) != 0 {
                    then.eval(n)
                } else {
                    otherwise.eval(n)
                }
            }
        }
    }
}

impl core::fmt::Display for PluralExpr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PluralExpr::Constant(value) => write!(f, "{value}"),
            PluralExpr::Variable => f.write_str("n"),
            PluralExpr::Binary { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            }
            PluralExpr::Ternary {
                condition,
                then,
                otherwise,
            } => write!(f, "({condition} ? {then} : {otherwise})"),
        }
    }
}
