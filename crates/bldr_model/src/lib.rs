// bldr_model - Type model the builder generator reasons about
//! Capability-based facade over a statically analysed Java type system.
//!
//! The classifier and the source generator never touch a live compiler
//! context. Everything they need to know about types (qualified names,
//! generic arguments, wildcards, primitive/boxed pairs, and which types carry
//! builders of their own) is expressed through the structures in this crate,
//! so the rest of the pipeline stays a pure function of its inputs.

mod name;
mod types;
mod universe;
mod user_type;

pub use name::{QualifiedName, TypeReference};
pub use types::{DeclaredType, JavaType, PrimitiveType};
pub use universe::{BuildableType, BuilderFactory, TypeUniverse};
pub use user_type::{AccessorMethod, StandardMethod, UserType};
