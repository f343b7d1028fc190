//! Configuration for graph sizing and search defaults.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! TOML file, then `MGRAPH_`-prefixed environment variables where `__`
//! separates nested keys (`MGRAPH_SEARCH__ALGORITHM=breadth_first`).
//!
//! ```toml
//! [graph]
//! expected_vertices = 1024
//! expected_edges = 4096
//!
//! [search]
//! algorithm = "breadth_first"
//! max_visits = 100000
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{find_all, find_first, find_n, FindAll, FindN, SearchAlgorithm, VertexRef};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MGRAPH_";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MgraphConfig {
    /// Graph capacity hints.
    pub graph: GraphConfig,
    /// Search strategy defaults.
    pub search: SearchConfig,
}

impl MgraphConfig {
    /// Loads configuration from defaults, an optional TOML file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `path` does not exist or a value cannot be
    /// extracted.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Parses configuration from a TOML document layered over defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the document is invalid.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::extract(Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|err| Error::Config(err.to_string()))
    }
}

/// Capacity hints used by [`Graph::from_config`](crate::graph::Graph::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Expected number of vertices.
    pub expected_vertices: usize,
    /// Expected number of connections.
    pub expected_edges: usize,
}

/// Defaults applied to strategies built from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Walk order for `find_n` and `find_first`.
    pub algorithm: SearchAlgorithm,
    /// Upper bound on the vertices a search walk enters, depth-first descent
    /// into cycles included; unbounded when unset.
    pub max_visits: Option<usize>,
}

impl SearchConfig {
    /// Builds a [`FindN`] with the configured algorithm and visit budget.
    pub fn find_n<D, A, P>(&self, number: usize, is_found: P) -> FindN<P>
    where
        P: Fn(VertexRef<'_, D, A>) -> bool,
    {
        let strategy = find_n(self.algorithm, number, is_found);
        match self.max_visits {
            Some(limit) => strategy.with_max_visits(limit),
            None => strategy,
        }
    }

    /// Builds a first-match [`FindN`] with the configured defaults.
    pub fn find_first<D, A, P>(&self, is_found: P) -> FindN<P>
    where
        P: Fn(VertexRef<'_, D, A>) -> bool,
    {
        let strategy = find_first(self.algorithm, is_found);
        match self.max_visits {
            Some(limit) => strategy.with_max_visits(limit),
            None => strategy,
        }
    }

    /// Builds a [`FindAll`] with the configured visit budget.
    ///
    /// `FindAll` always walks breadth-first.
    pub fn find_all<D, A, P>(&self, is_found: P) -> FindAll<P>
    where
        P: Fn(VertexRef<'_, D, A>) -> bool,
    {
        let strategy = find_all(is_found);
        match self.max_visits {
            Some(limit) => strategy.with_max_visits(limit),
            None => strategy,
        }
    }
}
