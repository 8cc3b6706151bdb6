// bldr_model/name - Qualified names and type references for generated Java
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Java package plus a non-empty chain of simple names.
///
/// Nested types keep their enclosing classes in the chain, so `Person.Builder`
/// and `Person_Builder.Value` render relative to their enclosing class rather
/// than as bare simple names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    package: String,
    simple_names: Vec<String>,
}

impl QualifiedName {
    /// Creates the name of a top-level class.
    pub fn top_level(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Returns the name of a type nested directly inside this one.
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_top_level(&self) -> bool {
        self.simple_names.len() == 1
    }

    /// The outermost class of the chain, as a name of its own.
    pub fn enclosing_top_level(&self) -> QualifiedName {
        QualifiedName {
            package: self.package.clone(),
            simple_names: self.simple_names.iter().take(1).cloned().collect(),
        }
    }

    /// Whether an unqualified reference resolves without an import.
    pub fn is_java_lang(&self) -> bool {
        self.package == "java.lang" && self.is_top_level()
    }

    /// Dot-joined name including the package.
    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple_names.join(".")
        } else {
            format!("{}.{}", self.package, self.simple_names.join("."))
        }
    }

    /// Dot-joined chain of simple names, without the package.
    pub fn relative(&self) -> String {
        self.simple_names.join(".")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}

/// A qualified name together with the type parameters declared on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    pub name: QualifiedName,
    pub type_params: Vec<String>,
}

impl TypeReference {
    pub fn new(name: QualifiedName, type_params: Vec<String>) -> Self {
        Self { name, type_params }
    }

    pub fn without_params(name: QualifiedName) -> Self {
        Self::new(name, Vec::new())
    }

    /// Renders `<T, U>`, or an empty string when no parameters are declared.
    pub fn params_suffix(&self) -> String {
        if self.type_params.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.type_params.join(", "))
        }
    }

    /// Renders `<?, ?>`, the raw-adjacent spelling used where Java forbids a
    /// parameterized type (instanceof checks), or an empty string.
    pub fn wildcard_suffix(&self) -> String {
        if self.type_params.is_empty() {
            String::new()
        } else {
            let marks: Vec<&str> = self.type_params.iter().map(|_| "?").collect();
            format!("<{}>", marks.join(", "))
        }
    }
}
