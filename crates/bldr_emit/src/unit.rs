/// Fully-rendered Java compilation unit.
///
/// Assembles the package declaration, the sorted import block, and the type
/// declaration into the final string. Either the whole unit renders or
/// nothing does; there is no partially-assembled output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub type_declaration: String,
}

impl CompilationUnit {
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        if let Some(package) = &self.package {
            out.push_str(&format!("package {};\n\n", package));
        }
        if !self.imports.is_empty() {
            for import in &self.imports {
                out.push_str(&format!("import {};\n", import));
            }
            out.push('\n');
        }
        out.push_str(&self.type_declaration);
        out
    }
}
