// bldr_emit - Java source emission engine
//! Accumulates a single compilation unit's text with indentation handling,
//! automatic qualified-name shortening and import management, and
//! per-target-level syntax selection.

mod builder;
mod error;
mod names;
mod source_level;
mod unit;

pub use builder::SourceBuilder;
pub use error::EmitError;
pub use source_level::SourceLevel;
pub use unit::CompilationUnit;
