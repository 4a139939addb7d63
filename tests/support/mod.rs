#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use phys2log::mapping::dictionary::{MappingDictionary, MappingEntry};

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}

pub(crate) fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

pub(crate) fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

pub(crate) fn dict(pairs: &[(&str, &str)]) -> MappingDictionary {
    pairs
        .iter()
        .map(|(physical, logical)| MappingEntry::new(*physical, *logical, None))
        .collect()
}

pub(crate) fn dict_with_descriptions(rows: &[(&str, &str, Option<&str>)]) -> MappingDictionary {
    rows.iter()
        .map(|(physical, logical, description)| {
            MappingEntry::new(*physical, *logical, description.map(str::to_string))
        })
        .collect()
}
