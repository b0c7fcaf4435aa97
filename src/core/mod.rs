pub mod codec;
pub mod data_source;
pub mod repository;
pub mod sort;

pub use crate::domain::model::{Contact, FullName};
pub use crate::domain::ports::{ContactRepository, Storage};
pub use crate::utils::error::Result;
