// Assembles one generated builder superclass from a validated descriptor.
//
// Emission runs through fixed, strictly ordered phases: header, preamble,
// fields, per-property methods, mergeFrom (value then builder), clear, build,
// buildPartial, then the Value and Partial nested classes. Reordering any of
// these changes generated output for every user, so the phases never vary.
use crate::error::GenerateError;
use crate::metadata::Metadata;
use crate::strategy::{self, EqualsComparison, ToStringFragment};
use crate::wellknown;
use bldr_emit::{CompilationUnit, EmitError, SourceBuilder, SourceLevel};
use bldr_model::{BuilderFactory, StandardMethod};
use tracing::debug;

#[derive(Debug, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders a complete compilation unit for the generated superclass.
    pub fn generate_unit(
        &self,
        metadata: &Metadata,
        level: SourceLevel,
    ) -> Result<CompilationUnit, GenerateError> {
        let package = metadata.target.name.package().to_string();
        let mut src = SourceBuilder::new(level, package.clone());
        self.write_builder_source(&mut src, metadata)?;
        let imports = src.imports();
        let type_declaration = src.finish()?;
        Ok(CompilationUnit {
            package: if package.is_empty() {
                None
            } else {
                Some(package)
            },
            imports,
            type_declaration,
        })
    }

    /// Emits the `<Type>_Builder` declaration into `src`.
    pub fn write_builder_source(
        &self,
        src: &mut SourceBuilder,
        meta: &Metadata,
    ) -> Result<(), EmitError> {
        debug!(
            target = %meta.target.name,
            properties = meta.properties.len(),
            level = src.level().as_str(),
            "generating builder superclass"
        );
        self.write_header(src, meta);
        self.write_preamble(src, meta)?;
        for prop in &meta.properties {
            src.blank_line();
            prop.strategy.emit_field(src, prop, meta);
        }
        for prop in &meta.properties {
            src.blank_line();
            prop.strategy.emit_methods(src, prop, meta);
        }
        src.blank_line();
        self.write_merge_from_value(src, meta);
        src.blank_line();
        self.write_merge_from_builder(src, meta);
        src.blank_line();
        self.write_clear(src, meta);
        src.blank_line();
        self.write_build(src, meta);
        src.blank_line();
        self.write_build_partial(src, meta);
        src.blank_line();
        self.write_value_class(src, meta, false)?;
        src.blank_line();
        self.write_value_class(src, meta, true)?;
        src.outdent();
        src.push_line("}");
        src.pop_scope(meta.generated_builder.name.simple_name())
    }

    fn write_header(&self, src: &mut SourceBuilder, meta: &Metadata) {
        let builder = src.add_type(&meta.builder.name);
        let target = src.add_type(&meta.target.name);
        src.push_line("/**");
        src.push_line(&format!(
            " * Auto-generated superclass of {{@link {}}},",
            builder
        ));
        src.push_line(&format!(" * derived from the API of {{@link {}}}.", target));
        src.push_line(" */");
        let generated = src.add_type(&wellknown::generated_annotation());
        src.push_line(&format!("@{}(\"bldr.processor.CodeGenerator\")", generated));
        if meta.gwt_compatible {
            let gwt = src.add_type(&wellknown::gwt_compatible());
            if meta.gwt_serializable {
                src.push_line(&format!("@{}(serializable = true)", gwt));
            } else {
                src.push_line(&format!("@{}", gwt));
            }
        }
        src.push_line(&format!(
            "abstract class {}{} {{",
            meta.generated_builder.name.simple_name(),
            meta.generated_builder.params_suffix()
        ));
        src.push_scope(meta.generated_builder.name.simple_name());
        src.indent();
    }

    /// Shared constants ahead of the property fields: the joiner used by
    /// conditional `toString` implementations and, when any property is
    /// required, the `Property` enum with its tracking EnumSet.
    fn write_preamble(&self, src: &mut SourceBuilder, meta: &Metadata) -> Result<(), EmitError> {
        if meta.needs_comma_joiner() {
            src.blank_line();
            let joiner = src.add_type(&wellknown::joiner());
            src.push_line(&format!(
                "private static final {} COMMA_JOINER = {}.on(\", \").skipNulls();",
                joiner, joiner
            ));
        }
        if !meta.has_required_properties() {
            return Ok(());
        }
        src.blank_line();
        src.push_line("private enum Property {");
        src.push_scope("Property");
        src.indent();
        for prop in meta.required_properties() {
            src.push_line(&format!("{}(\"{}\"),", prop.all_caps_name, prop.name));
        }
        src.push_line(";");
        src.blank_line();
        src.push_line("private final String name;");
        src.blank_line();
        src.push_line("Property(String name) {");
        src.indent();
        src.push_line("this.name = name;");
        src.outdent();
        src.push_line("}");
        src.blank_line();
        src.push_line("@Override");
        src.push_line("public String toString() {");
        src.indent();
        src.push_line("return name;");
        src.outdent();
        src.push_line("}");
        src.outdent();
        src.push_line("}");
        src.pop_scope("Property")?;
        src.blank_line();
        let enum_set = src.add_type(&wellknown::java_util("EnumSet"));
        let property_enum = src.add_type(&meta.property_enum.name);
        src.push_line(&format!(
            "private final {}<{}> _unsetProperties = {}.allOf({}.class);",
            enum_set, property_enum, enum_set, property_enum
        ));
        Ok(())
    }

    fn write_merge_from_value(&self, src: &mut SourceBuilder, meta: &Metadata) {
        let builder = strategy::builder_type(src, meta);
        let target = format!(
            "{}{}",
            src.add_type(&meta.target.name),
            meta.target.params_suffix()
        );
        src.push_line("/**");
        src.push_line(&format!(
            " * Sets all property values using the given {{@code {}}} as a template.",
            meta.target.name.simple_name()
        ));
        src.push_line(" */");
        src.push_line(&format!("public {} mergeFrom({} value) {{", builder, target));
        src.indent();
        for prop in &meta.properties {
            prop.strategy.emit_merge_from_value(src, prop, meta);
        }
        strategy::push_return_this(src, meta);
        src.outdent();
        src.push_line("}");
    }

    fn write_merge_from_builder(&self, src: &mut SourceBuilder, meta: &Metadata) {
        let builder = strategy::builder_type(src, meta);
        src.push_line("/**");
        src.push_line(" * Copies values from the given {@code Builder}.");
        src.push_line(" */");
        src.push_line(&format!(
            "public {} mergeFrom({} template) {{",
            builder, builder
        ));
        src.indent();
        for prop in &meta.properties {
            prop.strategy.emit_merge_from_builder(src, prop, meta);
        }
        strategy::push_return_this(src, meta);
        src.outdent();
        src.push_line("}");
    }

    fn write_clear(&self, src: &mut SourceBuilder, meta: &Metadata) {
        let builder = strategy::builder_type(src, meta);
        src.push_line("/**");
        src.push_line(" * Resets the state of this builder.");
        src.push_line(" */");
        src.push_line(&format!("public {} clear() {{", builder));
        src.indent();
        // Scalars reset through a freshly built template so defaults assigned
        // in the user's Builder constructor survive a clear().
        let template = if meta.has_template_reset_properties() && meta.builder_factory.is_some() {
            let generated = format!(
                "{}{}",
                src.add_type(&meta.generated_builder.name),
                meta.generated_builder.params_suffix()
            );
            let fresh = self.new_own_builder_expr(src, meta);
            src.push_line(&format!("{} _template = {};", generated, fresh));
            Some("_template")
        } else {
            None
        };
        for prop in &meta.properties {
            prop.strategy.emit_clear(src, prop, meta, template);
        }
        if meta.has_required_properties() {
            src.push_line("_unsetProperties.clear();");
            match template {
                Some(template) => {
                    src.push_line(&format!(
                        "_unsetProperties.addAll({}._unsetProperties);",
                        template
                    ));
                }
                None => {
                    let enum_set = src.add_type(&wellknown::java_util("EnumSet"));
                    let property_enum = src.add_type(&meta.property_enum.name);
                    src.push_line(&format!(
                        "_unsetProperties.addAll({}.allOf({}.class));",
                        enum_set, property_enum
                    ));
                }
            }
        }
        strategy::push_return_this(src, meta);
        src.outdent();
        src.push_line("}");
    }

    fn write_build(&self, src: &mut SourceBuilder, meta: &Metadata) {
        let target = format!(
            "{}{}",
            src.add_type(&meta.target.name),
            meta.target.params_suffix()
        );
        let target_link = src.add_type(&meta.target.name);
        src.push_line("/**");
        src.push_line(&format!(
            " * Returns a newly-created {{@link {}}} based on the contents of the {{@code Builder}}.",
            target_link
        ));
        if meta.has_required_properties() {
            src.push_line(" *");
            src.push_line(" * @throws IllegalStateException if any field has not been set");
        }
        src.push_line(" */");
        src.push_line(&format!("public {} build() {{", target));
        src.indent();
        if meta.has_required_properties() {
            let preconditions = src.add_type(&wellknown::preconditions());
            src.push_line(&format!(
                "{}.checkState(_unsetProperties.isEmpty(), \"Not set: %s\", _unsetProperties);",
                preconditions
            ));
        }
        let value = src.add_type(&meta.value_type.name);
        let params = strategy::constructed_params(src, &meta.value_type);
        src.push_line(&format!("return new {}{}(this);", value, params));
        src.outdent();
        src.push_line("}");
    }

    fn write_build_partial(&self, src: &mut SourceBuilder, meta: &Metadata) {
        let target = format!(
            "{}{}",
            src.add_type(&meta.target.name),
            meta.target.params_suffix()
        );
        let target_link = src.add_type(&meta.target.name);
        let visible = src.add_type(&wellknown::visible_for_testing());
        src.push_line("/**");
        src.push_line(&format!(
            " * Returns a newly-created partial {{@link {}}}",
            target_link
        ));
        src.push_line(" * based on the contents of the {@code Builder}.");
        src.push_line(" * State checking will not be performed.");
        src.push_line(" *");
        src.push_line(" * <p>Partials should only ever be used in tests.");
        src.push_line(" */");
        src.push_line(&format!("@{}()", visible));
        src.push_line(&format!("public {} buildPartial() {{", target));
        src.indent();
        let partial = src.add_type(&meta.partial_type.name);
        let params = strategy::constructed_params(src, &meta.partial_type);
        src.push_line(&format!("return new {}{}(this);", partial, params));
        src.outdent();
        src.push_line("}");
    }

    fn write_value_class(
        &self,
        src: &mut SourceBuilder,
        meta: &Metadata,
        partial: bool,
    ) -> Result<(), EmitError> {
        let class_ref = if partial {
            &meta.partial_type
        } else {
            &meta.value_type
        };
        let simple = class_ref.name.simple_name().to_string();
        let target = format!(
            "{}{}",
            src.add_type(&meta.target.name),
            meta.target.params_suffix()
        );
        let keyword = if meta.interface_type {
            "implements"
        } else {
            "extends"
        };
        src.push_line(&format!(
            "private static final class {}{} {} {} {{",
            simple,
            class_ref.params_suffix(),
            keyword,
            target
        ));
        src.push_scope(&simple);
        src.indent();
        for prop in &meta.properties {
            prop.strategy.emit_value_field(src, prop);
        }
        let tracks_unset = partial && meta.has_required_properties();
        if tracks_unset {
            let enum_set = src.add_type(&wellknown::java_util("EnumSet"));
            let property_enum = src.add_type(&meta.property_enum.name);
            src.push_line(&format!(
                "private final {}<{}> _unsetProperties;",
                enum_set, property_enum
            ));
        }
        src.blank_line();
        let generated = format!(
            "{}{}",
            src.add_type(&meta.generated_builder.name),
            meta.generated_builder.params_suffix()
        );
        if partial {
            src.push_line(&format!("{}({} builder) {{", simple, generated));
        } else {
            src.push_line(&format!("private {}({} builder) {{", simple, generated));
        }
        src.indent();
        for prop in &meta.properties {
            prop.strategy.emit_value_assignment(src, prop, partial);
        }
        if tracks_unset {
            src.push_line("this._unsetProperties = builder._unsetProperties.clone();");
        }
        src.outdent();
        src.push_line("}");
        for prop in &meta.properties {
            src.blank_line();
            prop.strategy.emit_value_accessor(src, prop, meta, partial);
        }
        if meta.declares_to_builder {
            src.blank_line();
            self.write_to_builder(src, meta, partial);
        }
        if !meta.underrides(StandardMethod::Equals) {
            src.blank_line();
            self.write_equals(src, meta, partial);
        }
        if !meta.underrides(StandardMethod::HashCode) {
            src.blank_line();
            self.write_hash_code(src, meta, partial);
        }
        if !meta.underrides(StandardMethod::ToString) {
            src.blank_line();
            self.write_to_string(src, meta, partial);
        }
        src.outdent();
        src.push_line("}");
        src.pop_scope(&simple)
    }

    fn write_to_builder(&self, src: &mut SourceBuilder, meta: &Metadata, partial: bool) {
        let builder = strategy::builder_type(src, meta);
        src.push_line("@Override");
        src.push_line(&format!("public {} toBuilder() {{", builder));
        src.indent();
        if partial {
            src.push_line("throw new UnsupportedOperationException();");
        } else {
            let fresh = self.new_own_builder_expr(src, meta);
            src.push_line(&format!("return {}.mergeFrom(this);", fresh));
        }
        src.outdent();
        src.push_line("}");
    }

    fn write_equals(&self, src: &mut SourceBuilder, meta: &Metadata, partial: bool) {
        let class_ref = if partial {
            &meta.partial_type
        } else {
            &meta.value_type
        };
        let raw = src.add_type(&class_ref.name);
        let declared = format!("{}{}", raw, class_ref.wildcard_suffix());
        src.push_line("@Override");
        src.push_line("public boolean equals(Object obj) {");
        src.indent();
        src.push_line(&format!("if (!(obj instanceof {})) {{", raw));
        src.indent();
        src.push_line("return false;");
        src.outdent();
        src.push_line("}");
        src.push_line(&format!("{} other = ({}) obj;", declared, declared));
        let mut comparisons: Vec<EqualsComparison> = Vec::new();
        for prop in &meta.properties {
            comparisons.push(prop.strategy.equals_comparison(src, prop, partial));
        }
        if partial && meta.has_required_properties() {
            comparisons.push(strategy::reference_comparison(src, "_unsetProperties"));
        }
        if src.level().has_java_util_objects() {
            match comparisons.len() {
                0 => src.push_line("return true;"),
                1 => src.push_line(&format!("return {};", comparisons[0].positive)),
                n => {
                    src.push_line(&format!("return {}", comparisons[0].positive));
                    for (index, comparison) in comparisons.iter().enumerate().skip(1) {
                        let terminator = if index + 1 == n { ";" } else { "" };
                        src.push_line(&format!("    && {}{}", comparison.positive, terminator));
                    }
                }
            }
        } else {
            for comparison in &comparisons {
                src.push_line(&format!("if ({}) {{", comparison.negated));
                src.indent();
                src.push_line("return false;");
                src.outdent();
                src.push_line("}");
            }
            src.push_line("return true;");
        }
        src.outdent();
        src.push_line("}");
    }

    fn write_hash_code(&self, src: &mut SourceBuilder, meta: &Metadata, partial: bool) {
        let mut operands: Vec<String> = meta.properties.iter().map(|p| p.name.clone()).collect();
        if partial && meta.has_required_properties() {
            operands.push("_unsetProperties".to_string());
        }
        src.push_line("@Override");
        src.push_line("public int hashCode() {");
        src.indent();
        if src.level().has_java_util_objects() {
            let objects = src.add_type(&wellknown::java_util("Objects"));
            src.push_line(&format!("return {}.hash({});", objects, operands.join(", ")));
        } else {
            let arrays = src.add_type(&wellknown::java_util("Arrays"));
            src.push_line(&format!(
                "return {}.hashCode(new Object[] {{{}}});",
                arrays,
                operands.join(", ")
            ));
        }
        src.outdent();
        src.push_line("}");
    }

    fn write_to_string(&self, src: &mut SourceBuilder, meta: &Metadata, partial: bool) {
        let prefix = if partial {
            format!("partial {}{{", meta.target.name.simple_name())
        } else {
            format!("{}{{", meta.target.name.simple_name())
        };
        let mut fragments: Vec<ToStringFragment> = Vec::new();
        for prop in &meta.properties {
            fragments.push(prop.strategy.to_string_fragment(src, prop, meta, partial));
        }
        src.push_line("@Override");
        src.push_line("public String toString() {");
        src.indent();
        let any_guarded = fragments.iter().any(|f| f.condition.is_some());
        if !any_guarded {
            let mut line = format!("return \"{}", prefix);
            for (index, fragment) in fragments.iter().enumerate() {
                if index == 0 {
                    line.push_str(&format!("{}=\" + {}", fragment.label, fragment.value_expr));
                } else {
                    line.push_str(&format!(
                        " + \", {}=\" + {}",
                        fragment.label, fragment.value_expr
                    ));
                }
            }
            if fragments.is_empty() {
                line.push_str("}\";");
            } else {
                line.push_str(" + \"}\";");
            }
            src.push_line(&line);
        } else if fragments.len() == 1 {
            let fragment = &fragments[0];
            let condition = fragment.condition.as_deref().unwrap_or("true");
            src.push_line(&format!(
                "return \"{}\" + ({} ? \"{}=\" + {} : \"\") + \"}}\";",
                prefix, condition, fragment.label, fragment.value_expr
            ));
        } else {
            src.push_line(&format!("return \"{}\"", prefix));
            src.push_line("    + COMMA_JOINER.join(");
            let count = fragments.len();
            for (index, fragment) in fragments.iter().enumerate() {
                let rendered = match &fragment.condition {
                    Some(condition) => format!(
                        "{} ? \"{}=\" + {} : null",
                        condition, fragment.label, fragment.value_expr
                    ),
                    None => format!("\"{}=\" + {}", fragment.label, fragment.value_expr),
                };
                let terminator = if index + 1 == count { ")" } else { "," };
                src.push_line(&format!("        {}{}", rendered, terminator));
            }
            src.push_line("    + \"}\";");
        }
        src.outdent();
        src.push_line("}");
    }

    fn new_own_builder_expr(&self, src: &mut SourceBuilder, meta: &Metadata) -> String {
        match meta.builder_factory {
            Some(BuilderFactory::StaticMethod) => {
                format!("{}.builder()", src.add_type(&meta.target.name))
            }
            _ => {
                let head = src.add_type(&meta.builder.name);
                let params = strategy::constructed_params(src, &meta.builder);
                format!("new {}{}()", head, params)
            }
        }
    }
}
