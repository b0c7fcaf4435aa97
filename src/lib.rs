pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MemoryStorage};
pub use app::Shell;
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    data_source::ContactsDataSource,
    repository::{AppContactRepository, SearchScope},
    sort::SortKey,
};
pub use domain::model::{Contact, FullName};
pub use domain::ports::{ContactRepository, Storage};
pub use utils::error::{ContactError, ErrorCategory, Result};
