use std::path::{Path, PathBuf};

use alloy_primitives::B256;
use anyhow::anyhow;
use serde::{Deserialize, de::DeserializeOwned};
use snap::raw::Decoder;

pub const PATH_TO_TEST_DATA_FOLDER: &str = "assets/ssz_static";

#[derive(Debug, Deserialize)]
pub struct Roots {
    pub root: B256,
}

pub fn read_ssz_snappy<T: ssz::Decode>(path: &Path) -> anyhow::Result<T> {
    let ssz = read_ssz_snappy_bytes(path)?;
    T::from_ssz_bytes(&ssz).map_err(|err| anyhow!("Failed to decode SSZ: {:?}", err))
}

pub fn read_ssz_snappy_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    let ssz_snappy = std::fs::read(path)?;
    let mut decoder = Decoder::new();
    Ok(decoder.decompress_vec(&ssz_snappy)?)
}

pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Every `case_*` directory under `assets/ssz_static/<type_name>/<suite>/`.
pub fn case_dirs(type_name: &str) -> anyhow::Result<Vec<PathBuf>> {
    let type_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(PATH_TO_TEST_DATA_FOLDER)
        .join(type_name);

    let mut cases = vec![];
    for suite in std::fs::read_dir(&type_dir)? {
        let suite_dir = suite?.path();
        if !suite_dir.is_dir() {
            continue;
        }
        for case in std::fs::read_dir(&suite_dir)? {
            let case_dir = case?.path();
            if case_dir.is_dir() {
                cases.push(case_dir);
            }
        }
    }
    cases.sort();

    Ok(cases)
}
