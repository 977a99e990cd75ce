use std::fmt::Write as _;

use mo_i18n_core::parse_plural_expr;

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct PluralOptions {
    pub expr: String,
    pub from: i64,
    pub to: i64,
}

pub fn run_plural(options: &PluralOptions) -> Result<String, CliError> {
    let expr = parse_plural_expr(&options.expr)?;
    let mut out = String::new();
    let _ = writeln!(out, "plural={expr}");
    for n in options.from..=options.to {
        let _ = writeln!(out, "{n}\t{}", expr.eval(n));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use mo_i18n_core::CoreError;

    use super::{PluralOptions, run_plural};
    use crate::error::CliError;

    #[test]
    fn tabulates_forms() {
        let output = run_plural(&PluralOptions {
            expr: "n==1 ? 0 : n>=2 && n<=4 ? 1 : 2".to_string(),
            from: 0,
            to: 5,
        })
        .expect("plural");
        let rows: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(rows, ["0\t2", "1\t0", "2\t1", "3\t1", "4\t1", "5\t2"]);
        assert!(output.starts_with("plural="));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = run_plural(&PluralOptions {
            expr: "n = 1".to_string(),
            from: 0,
            to: 1,
        })
        .expect_err("invalid");
        assert!(matches!(err, CliError::Catalog(CoreError::InvalidExpression)));
    }
}
