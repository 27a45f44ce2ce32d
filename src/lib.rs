pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

#[cfg(feature = "server")]
pub use config::server::{MemoryStorage, ServerConfig};

pub use crate::core::{etl::EtlEngine, pipeline::RegionSplitPipeline};
pub use utils::error::{Result, SplitError};
