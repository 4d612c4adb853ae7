//! Hanging mobiles modelled as binary trees.
//!
//! A [`Mobile`] is either a single weight or a rod with a sub-mobile hanging
//! from each end. The crate computes total mass and height, lists the leaf
//! weights, prints the bracket notation, checks torque balance, compares and
//! hashes mobiles structurally and mirrors them in place.
//!
//! ```
//! use mobile::Mobile;
//!
//! let m = Mobile::composite(Mobile::simple(2.0), 6.0, Mobile::simple(3.0), 4.0);
//! assert_eq!(m.weight(), 5.0);
//! assert!(m.is_balanced());
//! assert_eq!(m.pretty(), "[(3),4,(2),6]");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{parse_mobile, DomainError, Mobile};
