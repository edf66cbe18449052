//! Service configuration from the environment
//!
//! | Variable     | Default                                   |
//! |--------------|-------------------------------------------|
//! | `BIND_ADDR`  | `0.0.0.0:5000`                            |
//! | `BRAIN_PATH` | `ai_brain.json`                           |
//! | `RENDER`     | if set, `BRAIN_PATH` defaults to the Render data disk |
//!
//! Variables set to an empty string are treated as unset.
//!
//! A `.env` file is honoured by the binary before this is read.

use anyhow::{Context, Result};
use chess_brain::persistence::SNAPSHOT_FILENAME;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const RENDER_DATA_DIR: &str = "/opt/render/project/data";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub brain_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` uses the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty variable counts as unset
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("invalid BIND_ADDR '{}'", bind))?;

        let brain_path = match var("BRAIN_PATH") {
            Some(path) => PathBuf::from(path),
            None if var("RENDER").is_some() => {
                PathBuf::from(RENDER_DATA_DIR).join(SNAPSHOT_FILENAME)
            }
            None => PathBuf::from(SNAPSHOT_FILENAME),
        };

        Ok(Self {
            bind_addr,
            brain_path,
        })
    }
}
