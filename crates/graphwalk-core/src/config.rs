//! Graph configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! TOML file, then environment variables prefixed with `GRAPHWALK_`
//! (for example `GRAPHWALK_MAX_TIED_PATHS=500`).
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::GraphConfig;
//!
//! let config = GraphConfig::from_toml_str("max_tied_paths = 64").unwrap();
//! assert_eq!(config.max_tied_paths, 64);
//! assert_eq!(config.initial_capacity, 0);
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

/// Default cap on the number of tied shortest paths returned by one query.
pub const DEFAULT_MAX_TIED_PATHS: usize = 10_000;

/// Tunables for a [`Graph`](crate::graph::Graph) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum number of paths `find_all_shortest_paths_and_cost` may
    /// return before failing with `Error::PathLimitExceeded`. `0` disables
    /// the cap.
    pub max_tied_paths: usize,
    /// Number of nodes to reserve space for on construction.
    pub initial_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_tied_paths: DEFAULT_MAX_TIED_PATHS,
            initial_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Sets the tied-path cap (builder pattern).
    #[must_use]
    pub fn with_max_tied_paths(mut self, max_tied_paths: usize) -> Self {
        self.max_tied_paths = max_tied_paths;
        self
    }

    /// Sets the initial node capacity (builder pattern).
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Loads configuration from defaults, an optional TOML file and the
    /// `GRAPHWALK_` environment, in that order of precedence.
    ///
    /// A missing file is not an error; figment skips absent TOML files.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a layer holds a value of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Self::base();
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Parses configuration from an inline TOML document on top of defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the document is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::base()
            .merge(Toml::string(toml))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Returns the tied-path cap, or `None` when enumeration is unbounded.
    #[must_use]
    pub fn tied_path_limit(&self) -> Option<usize> {
        (self.max_tied_paths > 0).then_some(self.max_tied_paths)
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }
}
