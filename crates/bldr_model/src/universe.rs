// bldr_model/universe - Explicit type-resolution context for the pipeline
use crate::{PrimitiveType, QualifiedName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How generated code obtains a fresh builder for a buildable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuilderFactory {
    /// `new Foo.Builder()`
    NoArgsConstructor,
    /// `Foo.builder()`
    StaticMethod,
}

/// A type that follows the builder pattern itself. Accessors returning one of
/// these delegate merge and build semantics into the nested builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildableType {
    /// The value type, e.g. `Foo`.
    pub target: QualifiedName,
    /// The user-declared builder companion, e.g. `Foo.Builder`.
    pub builder: QualifiedName,
    pub factory: BuilderFactory,
}

/// Everything the pipeline knows about types beyond the one being processed.
///
/// This stands in for a live compiler context: boxed/primitive pairs and the
/// set of types known to carry their own builder are the only questions the
/// classifier ever asks about foreign types. Each generation run receives the
/// universe by reference and never mutates it.
#[derive(Debug, Clone)]
pub struct TypeUniverse {
    boxed_pairs: HashMap<QualifiedName, PrimitiveType>,
    buildable: IndexMap<QualifiedName, BuildableType>,
}

impl TypeUniverse {
    pub fn new() -> Self {
        let boxed_pairs = PrimitiveType::ALL
            .iter()
            .map(|primitive| (primitive.boxed(), *primitive))
            .collect();
        Self {
            boxed_pairs,
            buildable: IndexMap::new(),
        }
    }

    /// Registers a type as buildable, making accessors that return it eligible
    /// for the nested-buildable property kind.
    pub fn register_buildable(&mut self, buildable: BuildableType) {
        self.buildable.insert(buildable.target.clone(), buildable);
    }

    /// The primitive counterpart of a boxed type, if the pair exists.
    pub fn primitive_for(&self, name: &QualifiedName) -> Option<PrimitiveType> {
        self.boxed_pairs.get(name).copied()
    }

    pub fn buildable(&self, name: &QualifiedName) -> Option<&BuildableType> {
        self.buildable.get(name)
    }
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::new()
    }
}
