use crate::{BinaryOp, CoreError, CoreResult, PluralExpr};

const MAX_DEPTH: usize = 64;
const MAX_NODES: usize = 1024;

/// Malformed pieces degrade to the constant `0`; only input left over after a
/// complete parse, or an expression over the depth or node budget, is an error.
pub fn parse_plural_expr(input: &str) -> CoreResult<PluralExpr> {
    parse_plural_expr_bytes(input.as_bytes())
}

pub fn parse_plural_expr_bytes(input: &[u8]) -> CoreResult<PluralExpr> {
    let mut parser = Parser::new(input);
    let expr = parser.parse_ternary();
    if parser.exhausted {
        return Err(CoreError::InvalidExpression);
    }
    parser.skip_whitespace();
    match parser.peek() {
        None | Some(b'\0' | b';' | b'\r' | b'\n') => Ok(expr),
        Some(_) => Err(CoreError::InvalidExpression),
    }
}

struct Parser<'a> {
    input: &'a [u8],
    cursor: usize,
    depth: usize,
    nodes: usize,
    exhausted: bool,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: 0,
            depth: 0,
            nodes: 0,
            exhausted: false,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.cursor).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.cursor + ahead).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.cursor += 1;
        }
    }

    fn eat(&mut self, token: &[u8]) -> bool {
        if self.input[self.cursor..].starts_with(token) {
            self.cursor += token.len();
            true
        } else {
            false
        }
    }

    fn node(&mut self, build: impl FnOnce() -> PluralExpr) -> PluralExpr {
        self.nodes += 1;
        if self.nodes > MAX_NODES {
            self.exhausted = true;
            return PluralExpr::Constant(0);
        }
        build()
    }

    fn parse_ternary(&mut self) -> PluralExpr {
        if self.depth >= MAX_DEPTH {
            self.exhausted = true;
            return PluralExpr::Constant(0);
        }
        self.depth += 1;
        let expr = self.parse_ternary_inner();
        self.depth -= 1;
        expr
    }

    fn parse_ternary_inner(&mut self) -> PluralExpr {
        let condition = self.parse_or();
        self.skip_whitespace();
        if !self.eat(b"?") {
            return condition;
        }
        let then = self.parse_ternary();
        self.skip_whitespace();
        if !self.eat(b":") {
            return condition;
        }
        let otherwise = self.parse_ternary();
        self.node(|| PluralExpr::ternary(condition, then, otherwise))
    }

    fn parse_or(&mut self) -> PluralExpr {
        let mut left = self.parse_and();
        loop {
            self.skip_whitespace();
            if self.eat(b"||") {
                let right = self.parse_and();
                left = self.node(|| PluralExpr::binary(BinaryOp::LogicalOr, left, right));
            } else {
                return left;
            }
        }
    }

    fn parse_and(&mut self) -> PluralExpr {
        let mut left = self.parse_comparison();
        loop {
            self.skip_whitespace();
            if self.eat(b"&&") {
                let right = self.parse_comparison();
                left = self.node(|| PluralExpr::binary(BinaryOp::LogicalAnd, left, right));
            } else {
                return left;
            }
        }
    }

    fn parse_comparison(&mut self) -> PluralExpr {
        let mut left = self.parse_summands();
        loop {
            self.skip_whitespace();
            // Two-character operators first so `<=` is not read as `<`.
            let op = if self.eat(b"==") {
                BinaryOp::Equals
            } else if self.eat(b"!=") {
                BinaryOp::NotEquals
            } else if self.eat(b"<=") {
                BinaryOp::LessOrEqual
            } else if self.eat(b">=") {
                BinaryOp::GreaterOrEqual
            } else if self.eat(b"<") {
                BinaryOp::Less
            } else if self.eat(b">") {
                BinaryOp::Greater
            } else {
                return left;
            };
            let right = self.parse_summands();
            left = self.node(|| PluralExpr::binary(op, left, right));
        }
    }

    fn parse_summands(&mut self) -> PluralExpr {
        let mut left = self.parse_factors();
        loop {
            self.skip_whitespace();
            let op = if self.eat(b"+") {
                BinaryOp::Add
            } else if self.eat(b"-") {
                BinaryOp::Subtract
            } else {
                return left;
            };
            let right = self.parse_factors();
            left = self.node(|| PluralExpr::binary(op, left, right));
        }
    }

    fn parse_factors(&mut self) -> PluralExpr {
        let mut left = self.parse_atom();
        loop {
            self.skip_whitespace();
            let op = if self.eat(b"*") {
                BinaryOp::Multiply
            } else if self.eat(b"/") {
                BinaryOp::Divide
            } else if self.eat(b"%") {
                BinaryOp::Remainder
            } else {
                return left;
            };
            let right = self.parse_atom();
            left = self.node(|| PluralExpr::binary(op, left, right));
        }
    }

    fn parse_atom(&mut self) -> PluralExpr {
        self.skip_whitespace();
        match self.peek() {
            Some(b'(') => {
                self.cursor += 1;
                let inner = self.parse_ternary();
                self.skip_whitespace();
                if self.eat(b")") {
                    inner
                } else {
                    // unbalanced
                    PluralExpr::Constant(0)
                }
            }
            Some(b'n') => {
                self.cursor += 1;
                PluralExpr::Variable
            }
            Some(ch) if ch.is_ascii_digit() => PluralExpr::Constant(self.parse_number()),
            Some(b'-') if self.peek_at(1).is_some_and(|ch| ch.is_ascii_digit()) => {
                self.cursor += 1;
                PluralExpr::Constant(self.parse_number().saturating_neg())
            }
            _ => PluralExpr::Constant(0),
        }
    }

    fn parse_number(&mut self) -> i64 {
        let mut value: i64 = 0;
        while let Some(ch) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(ch - b'0'));
            self.cursor += 1;
        }
        value
    }
}
