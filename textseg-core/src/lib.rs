//! Unicode line break classification and pairing
//!
//! This crate holds the deterministic half of line breaking: the compiled-in
//! Line_Break and East_Asian_Width tables (UAX #14, UAX #11), the context
//! [`Resolver`] that settles ambiguous values, and the [`BreakPairMatrix`]
//! that decides what may happen between two classes. It has no I/O and no
//! runtime dependencies; the `textseg-engine` crate drives it over text.
//!
//! # Example
//!
//! ```rust
//! use textseg_core::{BreakOpportunity, Config, Resolver, RunContext};
//!
//! let config = Config::default();
//! let resolver = Resolver::new(&config);
//! let mut ctx = RunContext::new(&config);
//!
//! let ops: Vec<_> = "ab cd"
//!     .chars()
//!     .map(|c| ctx.step(&resolver.resolve_char(c)))
//!     .collect();
//! assert_eq!(ops[3], BreakOpportunity::Allowed);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod class;
pub mod config;
pub mod context;
pub mod error;
pub mod pair;
pub mod resolver;
mod tables;
pub mod traits;
pub mod types;

pub use class::{class_of, width_of, EastAsianWidth, LineBreakClass, UnknownPropertyValue};
pub use config::{Config, ConfigBuilder, ExceptionSets, RuleVariant};
pub use context::RunContext;
pub use error::{CoreError, Result};
pub use pair::{BreakPairMatrix, PairAction};
pub use resolver::{QuoteDirection, Resolved, Resolver};
pub use tables::UNICODE_VERSION;
pub use traits::WordBreaker;
pub use types::BreakOpportunity;
