// bldr_model/types - Java type shapes the classifier reasons about
use crate::QualifiedName;
use serde::{Deserialize, Serialize};

/// The eight Java primitive types.
///
/// Each knows its boxed counterpart and the literal a field of this type
/// holds before assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Char,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    /// The language keyword (`int`, `boolean`, ...).
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Simple name of the boxed counterpart in `java.lang`.
    pub fn boxed_simple_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Char => "Character",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        }
    }

    pub fn boxed(self) -> QualifiedName {
        QualifiedName::top_level("java.lang", self.boxed_simple_name())
    }

    /// The language zero value for a field of this type.
    pub fn zero_literal(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "false",
            PrimitiveType::Byte => "0",
            PrimitiveType::Short => "0",
            PrimitiveType::Int => "0",
            PrimitiveType::Long => "0L",
            PrimitiveType::Char => "'\\0'",
            PrimitiveType::Float => "0.0f",
            PrimitiveType::Double => "0.0",
        }
    }
}

/// A declared (class or interface) type usage, possibly parameterized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredType {
    pub name: QualifiedName,
    pub args: Vec<JavaType>,
}

impl DeclaredType {
    pub fn raw(name: QualifiedName) -> Self {
        Self {
            name,
            args: Vec::new(),
        }
    }

    pub fn parameterized(name: QualifiedName, args: Vec<JavaType>) -> Self {
        Self { name, args }
    }

    pub fn is_raw(&self) -> bool {
        self.args.is_empty()
    }
}

/// Shape of an accessor return type or type argument, as analysed by the
/// front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JavaType {
    Primitive(PrimitiveType),
    Declared(DeclaredType),
    /// A type variable declared on the user's type.
    Variable(String),
    /// `?`, or `? extends Bound` when a bound is present.
    Wildcard { extends_bound: Option<Box<JavaType>> },
}

impl JavaType {
    pub fn declared(name: QualifiedName) -> Self {
        JavaType::Declared(DeclaredType::raw(name))
    }

    pub fn parameterized(name: QualifiedName, args: Vec<JavaType>) -> Self {
        JavaType::Declared(DeclaredType::parameterized(name, args))
    }

    pub fn wildcard() -> Self {
        JavaType::Wildcard {
            extends_bound: None,
        }
    }

    pub fn wildcard_extends(bound: JavaType) -> Self {
        JavaType::Wildcard {
            extends_bound: Some(Box::new(bound)),
        }
    }

    pub fn as_declared(&self) -> Option<&DeclaredType> {
        match self {
            JavaType::Declared(decl) => Some(decl),
            _ => None,
        }
    }

    /// Whether a cast to this type is fully checked at runtime, i.e. the
    /// erasure carries every constraint the static type does. Casts to types
    /// that fail this need an unchecked-warning suppression.
    pub fn is_fully_checked(&self) -> bool {
        match self {
            JavaType::Primitive(_) => true,
            JavaType::Variable(_) => false,
            JavaType::Wildcard { .. } => false,
            JavaType::Declared(decl) => decl.args.iter().all(|arg| {
                matches!(
                    arg,
                    JavaType::Wildcard {
                        extends_bound: None
                    }
                )
            }),
        }
    }
}
