//! Constraint-driven value synthesis for fieldcraft.
//!
//! Given a field descriptor, this crate produces random values that satisfy
//! ("valid") or deliberately violate ("invalid") its constraints, for use in
//! property-style and boundary tests.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;

pub use engine::Synthesizer;
pub use errors::GenerationError;
pub use model::{GeneratedValue, InvalidationStrategy};
