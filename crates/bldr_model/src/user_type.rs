// bldr_model/user_type - Front-end supplied model of one user-declared value type
use crate::{JavaType, QualifiedName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A standard `Object` method the user implements concretely on the value
/// type, suppressing the generated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StandardMethod {
    Equals,
    HashCode,
    ToString,
}

/// One abstract, zero-argument, non-void accessor method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorMethod {
    pub name: String,
    pub return_type: JavaType,
    /// Whether the accessor is annotated `@Nullable`.
    pub nullable: bool,
}

impl AccessorMethod {
    pub fn new(name: impl Into<String>, return_type: JavaType) -> Self {
        Self {
            name: name.into(),
            return_type,
            nullable: false,
        }
    }

    pub fn nullable(name: impl Into<String>, return_type: JavaType) -> Self {
        Self {
            name: name.into(),
            return_type,
            nullable: true,
        }
    }
}

/// The user's declared interface or abstract class, as analysed by the
/// static-analysis front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserType {
    pub name: QualifiedName,
    pub type_params: Vec<String>,
    /// Whether the declared type is an interface rather than an abstract class.
    pub interface: bool,
    /// Abstract accessors in declaration order. Generated fields and methods
    /// preserve this order verbatim.
    pub accessors: Vec<AccessorMethod>,
    /// Standard methods the user implements concretely.
    pub underrides: BTreeSet<StandardMethod>,
    /// Whether the type declares an abstract `Builder toBuilder()`.
    pub declares_to_builder: bool,
}

impl UserType {
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            type_params: Vec::new(),
            interface: false,
            accessors: Vec::new(),
            underrides: BTreeSet::new(),
            declares_to_builder: false,
        }
    }
}
