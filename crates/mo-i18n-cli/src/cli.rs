use std::path::PathBuf;

use thiserror::Error;

use crate::command_dump::{DumpOptions, run_dump};
use crate::command_inspect::{InspectOptions, run_inspect};
use crate::command_languages::{LanguagesOptions, run_languages};
use crate::command_lookup::{LookupOptions, run_lookup};
use crate::command_plural::{PluralOptions, run_plural};
use crate::command_resolve::{ResolveOptions, run_resolve};
use crate::error::CliError;

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Command(#[from] CliError),
}

pub fn run(args: Vec<String>) -> Result<String, CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    let output = match command.as_str() {
        "inspect" => run_inspect(&parse_inspect_options(args.collect())?)?,
        "lookup" => run_lookup(&parse_lookup_options(args.collect())?)?,
        "dump" => run_dump(&parse_dump_options(args.collect())?)?,
        "plural" => run_plural(&parse_plural_options(args.collect())?)?,
        "languages" => run_languages(&parse_languages_options(args.collect())?)?,
        "resolve" => run_resolve(&parse_resolve_options(args.collect())?)?,
        _ => return Err(CliAppError::Usage(usage())),
    };
    Ok(output)
}

fn parse_inspect_options(args: Vec<String>) -> Result<InspectOptions, CliAppError> {
    let mut catalog_path = None;
    let mut json = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => catalog_path = Some(PathBuf::from(next_value("--catalog", &mut iter)?)),
            "--json" => json = true,
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let catalog_path = catalog_path.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(InspectOptions { catalog_path, json })
}

fn parse_lookup_options(args: Vec<String>) -> Result<LookupOptions, CliAppError> {
    let mut catalog_path = None;
    let mut key = None;
    let mut plural = None;
    let mut count = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => catalog_path = Some(PathBuf::from(next_value("--catalog", &mut iter)?)),
            "--key" => key = Some(next_value("--key", &mut iter)?),
            "--plural" => plural = Some(next_value("--plural", &mut iter)?),
            "--count" => count = Some(parse_number("--count", &next_value("--count", &mut iter)?)?),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let catalog_path = catalog_path.ok_or_else(|| CliAppError::Usage(usage()))?;
    let key = key.ok_or_else(|| CliAppError::Usage(usage()))?;
    let plural = match (plural, count) {
        (Some(plural), Some(count)) => Some((plural, count)),
        (None, None) => None,
        _ => {
            return Err(CliAppError::Usage(format!(
                "--plural and --count go together\n\n{}",
                usage()
            )));
        }
    };
    Ok(LookupOptions {
        catalog_path,
        key,
        plural,
    })
}

fn parse_dump_options(args: Vec<String>) -> Result<DumpOptions, CliAppError> {
    let mut catalog_path = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => catalog_path = Some(PathBuf::from(next_value("--catalog", &mut iter)?)),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let catalog_path = catalog_path.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(DumpOptions { catalog_path })
}

fn parse_plural_options(args: Vec<String>) -> Result<PluralOptions, CliAppError> {
    let mut expr = None;
    let mut from = 0;
    let mut to = 20;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--expr" => expr = Some(next_value("--expr", &mut iter)?),
            "--from" => from = parse_number("--from", &next_value("--from", &mut iter)?)?,
            "--to" => to = parse_number("--to", &next_value("--to", &mut iter)?)?,
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let expr = expr.ok_or_else(|| CliAppError::Usage(usage()))?;
    if to < from {
        return Err(CliAppError::Usage(format!(
            "--to must not be below --from\n\n{}",
            usage()
        )));
    }
    Ok(PluralOptions { expr, from, to })
}

fn parse_languages_options(args: Vec<String>) -> Result<LanguagesOptions, CliAppError> {
    let mut name_of = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--name" => name_of = Some(next_value("--name", &mut iter)?),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(LanguagesOptions { name_of })
}

fn parse_resolve_options(args: Vec<String>) -> Result<ResolveOptions, CliAppError> {
    let mut config_path = PathBuf::from("mo-i18n.toml");
    let mut languages = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--language" => languages.push(next_value("--language", &mut iter)?),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(ResolveOptions {
        config_path,
        languages,
    })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn parse_number(flag: &str, value: &str) -> Result<i64, CliAppError> {
    value.parse().map_err(|_| {
        CliAppError::Usage(format!("{flag} expects an integer, got {value:?}\n\n{}", usage()))
    })
}

fn usage() -> String {
    "usage: mo-i18n inspect --catalog <path> [--json]\n       mo-i18n lookup --catalog <path> --key <msgid> [--plural <msgid_plural> --count <n>]\n       mo-i18n dump --catalog <path>\n       mo-i18n plural --expr <expression> [--from <n>] [--to <n>]\n       mo-i18n languages [--name <id>]\n       mo-i18n resolve [--config <path>] [--language <id>...]".to_string()
}
