//! Configuration schema types for procstream.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod endpoint;
mod log;
mod run;

pub use endpoint::*;
pub use log::*;
pub use run::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProcstreamConfig {
    pub endpoint: EndpointConfig,
    pub log: LogConfig,
    pub run: RunConfig,
}
