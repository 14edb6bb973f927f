//! ivycc - Find Angular libraries that still need the ngcc compatibility compiler.
//!
//! ivycc validates a project's `@angular/cli` version and then walks
//! `node_modules` looking for packages that ngcc had to recompile, so you
//! know which dependencies to upgrade before moving to a fully Ivy toolchain.
//!
//! # Modules
//!
//! - [`check`] - Version gate, `node_modules` walk and report
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output, themes and tables
//!
//! # Example
//!
//! ```
//! use ivycc::check::coerce;
//!
//! let version = coerce("^15.2.0").unwrap();
//! assert_eq!(version.major, 15);
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod ui;

pub use error::{IvyccError, Result};
