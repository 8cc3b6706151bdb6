use bldr_model::QualifiedName;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Tracks which simple names are bound in the current compilation unit and
/// which imports those bindings imply.
///
/// The first type to claim a simple name wins the short spelling; later types
/// sharing that simple name fall back to their fully-qualified form. Types
/// from `java.lang` and from the unit's own package shorten without an
/// import.
#[derive(Debug, Clone)]
pub(crate) struct TypeShortener {
    package: String,
    bindings: IndexMap<String, QualifiedName>,
    imports: BTreeSet<String>,
}

impl TypeShortener {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            bindings: IndexMap::new(),
            imports: BTreeSet::new(),
        }
    }

    /// Renders a name as short as the current bindings allow, recording an
    /// import on first use when shortening requires one.
    pub fn shorten(&mut self, name: &QualifiedName) -> String {
        let top = name.enclosing_top_level();
        let simple = top.simple_name().to_string();
        let head = match self.bindings.get(&simple) {
            Some(bound) if *bound == top => simple,
            Some(_) => top.qualified(),
            None => {
                self.bindings.insert(simple.clone(), top.clone());
                if !top.is_java_lang() && top.package() != self.package {
                    self.imports.insert(top.qualified());
                }
                simple
            }
        };
        let mut rendered = head;
        for inner in &name.simple_names()[1..] {
            rendered.push('.');
            rendered.push_str(inner);
        }
        rendered
    }

    /// The accumulated imports, sorted.
    pub fn imports(&self) -> Vec<String> {
        self.imports.iter().cloned().collect()
    }
}
