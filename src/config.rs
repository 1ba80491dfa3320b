use anyhow::Result;
use serde_derive::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use toml;

pub(crate) fn parse<P: AsRef<Path>>(p: P) -> Result<Config> {
    let s = fs::read_to_string(p)?;
    from_str(&s)
}

fn from_str(s: &str) -> Result<Config> {
    let config = toml::from_str(s)?;
    Ok(config)
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) debug: bool,
    pub(crate) log_file: Option<PathBuf>,
}
