// Required scalars: set-before-use is tracked in the builder's
// `_unsetProperties` EnumSet and enforced at `build()` and on reads.
use super::{self as strategy, RequiredProperty};
use crate::metadata::{Metadata, Property};
use crate::wellknown;
use bldr_emit::SourceBuilder;

pub(super) fn emit_field(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &RequiredProperty,
    _meta: &Metadata,
) {
    let ty = src.type_name(&prop.boxed_type);
    src.push_line(&format!("private {} {};", ty, prop.name));
}

pub(super) fn emit_methods(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &RequiredProperty,
    meta: &Metadata,
) {
    let builder = strategy::builder_type(src, meta);
    let link = strategy::getter_link(src, meta, prop);
    let param = data.scalar.parameter_type(src);
    let constant = strategy::property_enum_constant(src, meta, prop);

    src.push_line("/**");
    src.push_line(&format!(" * Sets the value to be returned by {}.", link));
    strategy::push_returns_builder_doc(src);
    if data.scalar.needs_null_check() {
        src.push_line(&format!(
            " * @throws NullPointerException if {{@code {}}} is null",
            prop.name
        ));
    }
    src.push_line(" */");
    src.push_line(&format!(
        "public {} set{}({} {}) {{",
        builder, prop.capitalized_name, param, prop.name
    ));
    src.indent();
    if data.scalar.needs_null_check() {
        let preconditions = src.add_type(&wellknown::preconditions());
        src.push_line(&format!(
            "this.{} = {}.checkNotNull({});",
            prop.name, preconditions, prop.name
        ));
    } else {
        src.push_line(&format!("this.{} = {};", prop.name, prop.name));
    }
    src.push_line(&format!("_unsetProperties.remove({});", constant));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    let return_type = src.type_name(&prop.boxed_type);
    let preconditions = src.add_type(&wellknown::preconditions());
    src.push_line("/**");
    src.push_line(&format!(
        " * Returns the value that will be returned by {}.",
        link
    ));
    src.push_line(" *");
    src.push_line(" * @throws IllegalStateException if the field has not been set");
    src.push_line(" */");
    src.push_line(&format!(
        "public {} {}() {{",
        return_type, prop.getter_name
    ));
    src.indent();
    src.push_line(&format!(
        "{}.checkState(!_unsetProperties.contains({}), \"{} not set\");",
        preconditions, constant, prop.name
    ));
    src.push_line(&format!("return {};", prop.name));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_merge_from_value(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &RequiredProperty,
    _meta: &Metadata,
) {
    src.push_line(&format!(
        "set{}(value.{}());",
        prop.capitalized_name, prop.getter_name
    ));
}

pub(super) fn emit_merge_from_builder(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &RequiredProperty,
    meta: &Metadata,
) {
    let cast = strategy::template_cast(src, meta);
    let constant = strategy::property_enum_constant(src, meta, prop);
    src.push_line(&format!(
        "if (!{}._unsetProperties.contains({})) {{",
        cast, constant
    ));
    src.indent();
    src.push_line(&format!(
        "set{}({}.{});",
        prop.capitalized_name, cast, prop.name
    ));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_clear(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &RequiredProperty,
    _meta: &Metadata,
    template: Option<&str>,
) {
    match template {
        Some(template) => {
            src.push_line(&format!("{} = {}.{};", prop.name, template, prop.name));
        }
        None => {
            src.push_line(&format!("{} = null;", prop.name));
        }
    }
}

pub(super) fn emit_value_field(src: &mut SourceBuilder, prop: &Property, _data: &RequiredProperty) {
    let ty = src.type_name(&prop.boxed_type);
    src.push_line(&format!("private final {} {};", ty, prop.name));
}

pub(super) fn emit_value_accessor(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &RequiredProperty,
    meta: &Metadata,
    partial: bool,
) {
    let return_type = src.type_name(&prop.boxed_type);
    if !partial {
        strategy::push_simple_value_accessor(src, prop, &return_type);
        return;
    }
    let constant = strategy::property_enum_constant(src, meta, prop);
    src.push_line("@Override");
    src.push_line(&format!(
        "public {} {}() {{",
        return_type, prop.getter_name
    ));
    src.indent();
    src.push_line(&format!("if (_unsetProperties.contains({})) {{", constant));
    src.indent();
    src.push_line(&format!(
        "throw new UnsupportedOperationException(\"{} not set\");",
        prop.name
    ));
    src.outdent();
    src.push_line("}");
    src.push_line(&format!("return {};", prop.name));
    src.outdent();
    src.push_line("}");
}
