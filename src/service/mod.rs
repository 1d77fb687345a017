//! Service layer module.
//!
//! Contains the generation pipeline: universe resolution, exclusion
//! filtering, option validation and sampling.

pub mod filter;
pub mod generator;
pub mod sampler;
pub(crate) mod universe;
pub mod validator;

pub use filter::{ExclusionSet, FRIENDLY_MASK};
pub use generator::{MAX_BATCH_COUNT, TokenGenerator};
