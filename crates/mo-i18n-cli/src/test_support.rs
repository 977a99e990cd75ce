use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use mo_i18n_core::MoBuilder;

pub fn temp_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    path.push(format!("mo_i18n_cli_{name}_{nanos}"));
    fs::create_dir_all(&path).expect("dir");
    path
}

pub fn build_catalog(entries: &[(&str, &str)]) -> Vec<u8> {
    entries
        .iter()
        .fold(MoBuilder::new(), |builder, (original, translation)| {
            builder.entry(original.as_bytes(), translation.as_bytes())
        })
        .build()
}
