// Primitive scalars always hold a value, so no presence tracking applies and
// `clear()` resets to the language zero value.
use super::{self as strategy, PrimitiveProperty};
use crate::metadata::{Metadata, Property};
use bldr_emit::SourceBuilder;

pub(super) fn emit_field(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &PrimitiveProperty,
    _meta: &Metadata,
) {
    src.push_line(&format!(
        "private {} {};",
        data.primitive.keyword(),
        prop.name
    ));
}

pub(super) fn emit_methods(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &PrimitiveProperty,
    meta: &Metadata,
) {
    let builder = strategy::builder_type(src, meta);
    let link = strategy::getter_link(src, meta, prop);
    let keyword = data.primitive.keyword();

    src.push_line("/**");
    src.push_line(&format!(" * Sets the value to be returned by {}.", link));
    strategy::push_returns_builder_doc(src);
    src.push_line(" */");
    src.push_line(&format!(
        "public {} set{}({} {}) {{",
        builder, prop.capitalized_name, keyword, prop.name
    ));
    src.indent();
    src.push_line(&format!("this.{} = {};", prop.name, prop.name));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    src.push_line("/**");
    src.push_line(&format!(
        " * Returns the value that will be returned by {}.",
        link
    ));
    src.push_line(" */");
    src.push_line(&format!("public {} {}() {{", keyword, prop.getter_name));
    src.indent();
    src.push_line(&format!("return {};", prop.name));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_merge_from_value(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &PrimitiveProperty,
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
    _data: &PrimitiveProperty,
    meta: &Metadata,
) {
    let cast = strategy::template_cast(src, meta);
    src.push_line(&format!(
        "set{}({}.{});",
        prop.capitalized_name, cast, prop.name
    ));
}

pub(super) fn emit_clear(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &PrimitiveProperty,
    _meta: &Metadata,
    template: Option<&str>,
) {
    match template {
        Some(template) => {
            src.push_line(&format!("{} = {}.{};", prop.name, template, prop.name));
        }
        None => {
            src.push_line(&format!(
                "{} = {};",
                prop.name,
                data.primitive.zero_literal()
            ));
        }
    }
}

pub(super) fn emit_value_field(src: &mut SourceBuilder, prop: &Property, data: &PrimitiveProperty) {
    src.push_line(&format!(
        "private final {} {};",
        data.primitive.keyword(),
        prop.name
    ));
}

pub(super) fn emit_value_accessor(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &PrimitiveProperty,
) {
    strategy::push_simple_value_accessor(src, prop, data.primitive.keyword());
}
