//! Application layer: reports built on top of the domain
//!
//! This layer turns mobile queries into text and writes it to an output sink.

pub mod demo;
pub mod error;
pub mod error_ext;
pub mod summary;

pub use demo::{run_demo, sample_mobile, DemoReport};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use summary::Summary;
