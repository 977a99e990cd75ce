use std::fmt::Write as _;
use std::path::PathBuf;

use mo_i18n_core::{ByteOrder, LookupStrategy, MoCatalog, language_name};
use mo_i18n_runtime::{load_catalog, sha256_hex};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub catalog_path: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    path: String,
    sha256: String,
    byte_order: &'static str,
    revision: u32,
    strings: usize,
    strategy: &'static str,
    hash_table_size: u32,
    plural_forms: u32,
    plural_expr: String,
    plural_declared: bool,
    language: Option<String>,
    language_name: Option<&'static str>,
    language_team: Option<String>,
    charset: Option<String>,
}

pub fn run_inspect(options: &InspectOptions) -> Result<String, CliError> {
    let catalog = load_catalog(&options.catalog_path)?;
    let report = build_report(&options.catalog_path, &catalog);
    if options.json {
        let mut output = serde_json::to_string_pretty(&report)?;
        output.push('\n');
        return Ok(output);
    }
    Ok(render_text(&report))
}

fn build_report(path: &std::path::Path, catalog: &MoCatalog) -> InspectReport {
    let header = catalog.header();
    let metadata = catalog.metadata();
    let rule = catalog.plural_rule();
    let language = metadata.language().map(String::from);
    InspectReport {
        path: path.display().to_string(),
        sha256: sha256_hex(catalog.as_bytes()),
        byte_order: match header.byte_order {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        },
        revision: header.revision,
        strings: catalog.string_count(),
        strategy: match catalog.strategy() {
            LookupStrategy::Hashed => "hashed",
            LookupStrategy::Sorted => "sorted",
        },
        hash_table_size: header.hash_table_size,
        plural_forms: rule.count(),
        plural_expr: rule.expr().to_string(),
        plural_declared: rule.is_declared(),
        language_name: language.as_deref().and_then(language_name),
        language,
        language_team: metadata.language_team().map(String::from),
        charset: metadata.charset().map(String::from),
    }
}

fn render_text(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "path: {}", report.path);
    let _ = writeln!(out, "sha256: {}", report.sha256);
    let _ = writeln!(out, "byte order: {}", report.byte_order);
    let _ = writeln!(out, "revision: {}", report.revision);
    let _ = writeln!(out, "strings: {}", report.strings);
    let _ = writeln!(
        out,
        "lookup: {} (hash table size {})",
        report.strategy, report.hash_table_size
    );
    let source = if report.plural_declared { "declared" } else { "default" };
    let _ = writeln!(
        out,
        "plural: {} forms, {} ({source})",
        report.plural_forms, report.plural_expr
    );
    let language = match (&report.language, report.language_name) {
        (Some(id), Some(name)) => format!("{id} ({name})"),
        (Some(id), None) => id.clone(),
        (None, _) => "-".to_string(),
    };
    let _ = writeln!(out, "language: {language}");
    let _ = writeln!(
        out,
        "language team: {}",
        report.language_team.as_deref().unwrap_or("-")
    );
    let _ = writeln!(out, "charset: {}", report.charset.as_deref().unwrap_or("-"));
    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{InspectOptions, run_inspect};
    use crate::test_support::{build_catalog, temp_dir};

    const HEADER: &str = "Language: pl\n\
Language-Team: Polish <pl@li.org>\n\
Content-Type: text/plain; charset=UTF-8\n\
Plural-Forms: nplurals=3; plural=n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2;\n";

    fn write_catalog(name: &str) -> (std::path::PathBuf, std::path::PathBuf) {
        let dir = temp_dir(name);
        let path = dir.join("pl.mo");
        fs::write(&path, build_catalog(&[("", HEADER), ("Exit", "Wyj\u{15b}cie")]))
            .expect("write");
        (dir, path)
    }

    #[test]
    fn inspect_text_report() {
        let (dir, path) = write_catalog("inspect");
        let output = run_inspect(&InspectOptions {
            catalog_path: path,
            json: false,
        })
        .expect("inspect");
        assert!(output.contains("byte order: little\n"));
        assert!(output.contains("strings: 2\n"));
        assert!(output.contains("lookup: sorted (hash table size 0)\n"));
        assert!(output.contains("plural: 3 forms,"));
        assert!(output.contains("(declared)"));
        assert!(output.contains("language: pl (Polski)\n"));
        assert!(output.contains("charset: UTF-8\n"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn inspect_json_report() {
        let (dir, path) = write_catalog("inspect_json");
        let output = run_inspect(&InspectOptions {
            catalog_path: path,
            json: true,
        })
        .expect("inspect");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value["strings"], 2);
        assert_eq!(value["strategy"], "sorted");
        assert_eq!(value["plural_forms"], 3);
        assert_eq!(value["language_team"], "Polish <pl@li.org>");
        assert!(value["sha256"].as_str().expect("digest").starts_with("sha256:"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn inspect_rejects_non_catalog() {
        let dir = temp_dir("inspect_bad");
        let path = dir.join("bad.mo");
        fs::write(&path, [0u8; 64]).expect("write");
        let err = run_inspect(&InspectOptions {
            catalog_path: path,
            json: false,
        })
        .expect_err("bad signature");
        assert!(err.to_string().contains("bad catalog signature"));
        fs::remove_dir_all(&dir).ok();
    }
}
