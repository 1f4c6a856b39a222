//! Run configuration.
//!
//! trailguard takes no flags and reads no config file. The two knobs it has
//! come from the environment; AWS region and credentials are left entirely
//! to the SDK's default provider chain.

use std::path::PathBuf;

pub const GRAPH_PATH_VAR: &str = "TRAILGUARD_GRAPH_PATH";
pub const GRAPH_NAME_VAR: &str = "TRAILGUARD_GRAPH_NAME";

pub const DEFAULT_GRAPH_PATH: &str = "cloudtrail.dot";
pub const DEFAULT_GRAPH_NAME: &str = "CloudTrail";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Where the DOT artifact is written
    pub graph_path: PathBuf,
    /// Name of the `digraph` in the artifact
    pub graph_name: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from(DEFAULT_GRAPH_PATH),
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
        }
    }
}

impl RunConfig {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary variable lookup. Unset and blank
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            graph_path: non_blank(GRAPH_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.graph_path),
            graph_name: non_blank(GRAPH_NAME_VAR).unwrap_or(defaults.graph_name),
        }
    }
}
