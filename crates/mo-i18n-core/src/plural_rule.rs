use crate::{CoreError, CoreResult, PluralExpr, parse_plural_expr_bytes};

const PLURAL_MARKER: &[u8] = b"plural=";
const NPLURALS_MARKER: &[u8] = b"nplurals=";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluralRule {
    expr: PluralExpr,
    count: u32,
    declared: bool,
}

impl PluralRule {
    pub fn new(expr: PluralExpr, count: u32) -> Self {
        Self {
            expr,
            count,
            declared: true,
        }
    }

    pub fn from_header(header: &[u8]) -> CoreResult<Self> {
        let header = match header.iter().position(|&byte| byte == 0) {
            Some(end) => &header[..end],
            None => header,
        };
        let plural = find(header, PLURAL_MARKER).ok_or(CoreError::InvalidExpression)?;
        let nplurals = find(header, NPLURALS_MARKER).ok_or(CoreError::InvalidExpression)?;

        let count = parse_count(&header[nplurals + NPLURALS_MARKER.len()..])?;
        if count == 0 {
            return Err(CoreError::InvalidExpression);
        }
        let expr = parse_plural_expr_bytes(&header[plural + PLURAL_MARKER.len()..])?;
        Ok(Self::new(expr, count))
    }

    pub fn from_header_or_default(header: Option<&[u8]>) -> Self {
        header
            .and_then(|header| Self::from_header(header).ok())
            .unwrap_or_default()
    }

    pub fn index(&self, n: i64) -> i64 {
        self.expr.eval(n)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn expr(&self) -> &PluralExpr {
        &self.expr
    }

    pub fn is_declared(&self) -> bool {
        self.declared
    }
}

impl Default for PluralRule {
    fn default() -> Self {
        Self {
            expr: PluralExpr::germanic(),
            count: 2,
            declared: false,
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn parse_count(input: &[u8]) -> CoreResult<u32> {
    let digits = input
        .iter()
        .skip_while(|byte| byte.is_ascii_whitespace())
        .take_while(|byte| byte.is_ascii_digit());
    let mut count: u32 = 0;
    let mut seen = false;
    for &digit in digits {
        seen = true;
        count = count
            .checked_mul(10)
            .and_then(|value| value.checked_add(u32::from(digit - b'0')))
            .ok_or(CoreError::InvalidExpression)?;
    }
    if seen {
        Ok(count)
    } else {
        Err(CoreError::InvalidExpression)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::PluralRule;
    use crate::CoreError;

    const HEADER: &[u8] = b"Project-Id-Version: demo\n\
Language: pl\n\
Plural-Forms: nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);\n";

    #[test]
    fn extracts_rule_from_header() {
        let rule = PluralRule::from_header(HEADER).expect("rule");
        assert_eq!(rule.count(), 3);
        assert!(rule.is_declared());
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(3), 1);
        assert_eq!(rule.index(5), 2);
    }

    #[test]
    fn tolerates_space_after_nplurals() {
        let rule = PluralRule::from_header(b"Plural-Forms: nplurals= 2; plural=n>1;\n")
            .expect("rule");
        assert_eq!(rule.count(), 2);
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(2), 1);
    }

    #[test]
    fn missing_plural_clause_falls_back() {
        let header: &[u8] = b"Plural-Forms: nplurals=3;\n";
        assert_eq!(
            PluralRule::from_header(header),
            Err(CoreError::InvalidExpression)
        );
        let rule = PluralRule::from_header_or_default(Some(header));
        assert!(!rule.is_declared());
        assert_eq!(rule.count(), 2);
    }

    #[test]
    fn zero_plural_count_falls_back() {
        let rule =
            PluralRule::from_header_or_default(Some(b"Plural-Forms: nplurals=0; plural=0;\n"));
        assert_eq!(rule, PluralRule::default());
    }

    #[test]
    fn non_numeric_plural_count_falls_back() {
        let header: &[u8] = b"Plural-Forms: nplurals=two; plural=n != 1;\n";
        assert_eq!(
            PluralRule::from_header(header),
            Err(CoreError::InvalidExpression)
        );
    }

    #[test]
    fn malformed_expression_falls_back() {
        let rule = PluralRule::from_header_or_default(Some(
            b"Plural-Forms: nplurals=2; plural=n ~ 1;\n",
        ));
        assert_eq!(rule, PluralRule::default());
    }

    #[test]
    fn missing_header_uses_default() {
        assert_eq!(PluralRule::from_header_or_default(None), PluralRule::default());
    }

    proptest! {
        #[test]
        fn default_rule_is_n_not_one(n in any::<i64>()) {
            let expected = if n != 1 { 1 } else { 0 };
            prop_assert_eq!(PluralRule::default().index(n), expected);
        }
    }
}
