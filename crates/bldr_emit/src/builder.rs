use crate::names::TypeShortener;
use crate::{EmitError, SourceLevel};
use bldr_model::{DeclaredType, JavaType, QualifiedName};

const INDENT: &str = "  ";

/// Incrementally constructs one type declaration's source text.
///
/// Lines are indented in two-space units. Types are registered through
/// [`SourceBuilder::add_type`] (or the rendering helpers built on it), which
/// shortens qualified names and accumulates the import block as a side
/// effect. Nested class scopes are tracked so that closing them out of order
/// is caught as a defect instead of producing malformed text.
#[derive(Debug, Clone)]
pub struct SourceBuilder {
    level: SourceLevel,
    content: String,
    indent_level: usize,
    shortener: TypeShortener,
    scopes: Vec<String>,
}

impl SourceBuilder {
    pub fn new(level: SourceLevel, package: impl Into<String>) -> Self {
        Self {
            level,
            content: String::new(),
            indent_level: 0,
            shortener: TypeShortener::new(package),
            scopes: Vec::new(),
        }
    }

    pub fn level(&self) -> SourceLevel {
        self.level
    }

    pub fn push_line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.indent_level {
                self.content.push_str(INDENT);
            }
            self.content.push_str(line);
        }
        self.content.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.content.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn outdent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Registers a type use and returns its rendered (shortened) spelling.
    pub fn add_type(&mut self, name: &QualifiedName) -> String {
        self.shortener.shorten(name)
    }

    /// Renders a full type usage, recursing into type arguments.
    pub fn type_name(&mut self, java_type: &JavaType) -> String {
        match java_type {
            JavaType::Primitive(primitive) => primitive.keyword().to_string(),
            JavaType::Variable(name) => name.clone(),
            JavaType::Wildcard {
                extends_bound: None,
            } => "?".to_string(),
            JavaType::Wildcard {
                extends_bound: Some(bound),
            } => format!("? extends {}", self.type_name(bound)),
            JavaType::Declared(decl) => self.declared_name(decl),
        }
    }

    fn declared_name(&mut self, decl: &DeclaredType) -> String {
        let head = self.add_type(&decl.name);
        if decl.args.is_empty() {
            return head;
        }
        let args: Vec<String> = decl
            .args
            .iter()
            .map(|arg| self.type_name(arg))
            .collect();
        format!("{}<{}>", head, args.join(", "))
    }

    /// Renders the type of a `new` expression: a diamond at levels that
    /// support it, explicit type arguments otherwise.
    pub fn constructed_type(&mut self, decl: &DeclaredType) -> String {
        let head = self.add_type(&decl.name);
        if decl.args.is_empty() {
            return head;
        }
        if self.level.supports_diamond_operator() {
            format!("{}<>", head)
        } else {
            let args: Vec<String> = decl
                .args
                .iter()
                .map(|arg| self.type_name(arg))
                .collect();
            format!("{}<{}>", head, args.join(", "))
        }
    }

    /// Opens a nested class scope.
    pub fn push_scope(&mut self, class_name: &str) {
        self.scopes.push(class_name.to_string());
    }

    /// Closes the innermost scope. Closing out of order is a defect.
    pub fn pop_scope(&mut self, class_name: &str) -> Result<(), EmitError> {
        match self.scopes.pop() {
            Some(open) if open == class_name => Ok(()),
            Some(open) => Err(EmitError::ScopeMismatch {
                closed: class_name.to_string(),
                open,
            }),
            None => Err(EmitError::ScopeUnderflow {
                closed: class_name.to_string(),
            }),
        }
    }

    /// The imports implied by every type registered so far, sorted.
    pub fn imports(&self) -> Vec<String> {
        self.shortener.imports()
    }

    /// Finishes the unit, failing if a scope was left open.
    pub fn finish(self) -> Result<String, EmitError> {
        if let Some(open) = self.scopes.last() {
            return Err(EmitError::UnclosedScope { open: open.clone() });
        }
        Ok(self.content)
    }
}
