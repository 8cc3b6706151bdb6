//! Generates builder superclasses for Java value types.
//!
//! Given a description of a user-declared value type (its accessors and the
//! nested `Builder` the user wrote), this crate classifies every property
//! into exactly one kind and renders the `<Type>_Builder` abstract superclass
//! as Java source, including the hidden `Value` and `Partial` implementations.
//!
//! The pipeline is classify-then-emit: [`classifier::classify`] validates the
//! accessors and produces an immutable [`Metadata`] descriptor, and
//! [`CodeGenerator`] renders it. [`generate`] runs both steps.
pub mod classifier;
pub mod config;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod strategy;
mod wellknown;

pub use bldr_emit::{CompilationUnit, SourceLevel};
pub use config::GeneratorConfig;
pub use error::{ClassifyError, Diagnostic, GenerateError};
pub use generator::CodeGenerator;
pub use metadata::{Metadata, Property};
pub use strategy::{ElementType, OptionalFlavor, PropertyStrategy};

use bldr_model::{TypeUniverse, UserType};
use tracing::error;

/// Classifies `user` and renders its builder superclass as a full
/// compilation unit, package declaration and imports included.
pub fn generate(
    user: &UserType,
    universe: &TypeUniverse,
    config: &GeneratorConfig,
) -> Result<String, Vec<Diagnostic>> {
    let metadata = classifier::classify(user, universe, config)?;
    match CodeGenerator::new().generate_unit(&metadata, config.source_level) {
        Ok(unit) => Ok(unit.to_source()),
        Err(err) => {
            error!(target_type = %metadata.target.name, %err, "generation failed");
            Err(vec![Diagnostic::new(
                metadata.target.name.to_string(),
                err.to_string(),
            )])
        }
    }
}

#[cfg(test)]
mod tests;
