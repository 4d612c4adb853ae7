//! Domain layer: the mobile tree and its notation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod mobile;
pub mod parser;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use mobile::{Leaves, Mobile, EPSILON};
pub use parser::parse_mobile;
pub use tree::MobileTreeConvert;
