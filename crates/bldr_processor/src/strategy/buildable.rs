// Nested buildable properties: the builder holds a live sub-builder, so the
// nested value is finalized together with the enclosing one. `build()` calls
// the sub-builder's `build()`; `buildPartial()` cascades `buildPartial()`.
use super::{self as strategy, BuildableProperty};
use crate::metadata::{Metadata, Property};
use crate::wellknown;
use bldr_emit::SourceBuilder;
use bldr_model::BuilderFactory;

fn sub_builder_type(src: &mut SourceBuilder, data: &BuildableProperty) -> String {
    src.add_type(&data.buildable.builder)
}

fn new_sub_builder(src: &mut SourceBuilder, data: &BuildableProperty) -> String {
    match data.buildable.factory {
        BuilderFactory::NoArgsConstructor => {
            format!("new {}()", src.add_type(&data.buildable.builder))
        }
        BuilderFactory::StaticMethod => {
            format!("{}.builder()", src.add_type(&data.buildable.target))
        }
    }
}

pub(super) fn emit_field(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &BuildableProperty,
    _meta: &Metadata,
) {
    let sub_builder = sub_builder_type(src, data);
    let fresh = new_sub_builder(src, data);
    src.push_line(&format!(
        "private final {} {} = {};",
        sub_builder, prop.name, fresh
    ));
}

pub(super) fn emit_methods(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &BuildableProperty,
    meta: &Metadata,
) {
    let builder = strategy::builder_type(src, meta);
    let link = strategy::getter_link(src, meta, prop);
    let value_type = src.type_name(&prop.boxed_type);
    let preconditions = src.add_type(&wellknown::preconditions());

    src.push_line("/**");
    src.push_line(&format!(" * Sets the value to be returned by {}.", link));
    strategy::push_returns_builder_doc(src);
    src.push_line(&format!(
        " * @throws NullPointerException if {{@code {}}} is null",
        prop.name
    ));
    src.push_line(" */");
    src.push_line(&format!(
        "public {} set{}({} {}) {{",
        builder, prop.capitalized_name, value_type, prop.name
    ));
    src.indent();
    src.push_line(&format!("{}.checkNotNull({});", preconditions, prop.name));
    src.push_line(&format!("this.{}.clear();", prop.name));
    src.push_line(&format!("this.{}.mergeFrom({});", prop.name, prop.name));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    let sub_builder = sub_builder_type(src, data);
    src.push_line("/**");
    src.push_line(&format!(
        " * Returns a builder for the value that will be returned by {}.",
        link
    ));
    src.push_line(" */");
    src.push_line(&format!(
        "public {} {}Builder() {{",
        sub_builder, prop.getter_name
    ));
    src.indent();
    src.push_line(&format!("return {};", prop.name));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_merge_from_value(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &BuildableProperty,
    _meta: &Metadata,
) {
    src.push_line(&format!(
        "{}.mergeFrom(value.{}());",
        prop.name, prop.getter_name
    ));
}

pub(super) fn emit_merge_from_builder(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &BuildableProperty,
    meta: &Metadata,
) {
    let cast = strategy::template_cast(src, meta);
    src.push_line(&format!("{}.mergeFrom({}.{});", prop.name, cast, prop.name));
}

pub(super) fn emit_value_field(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &BuildableProperty,
) {
    let ty = src.type_name(&prop.boxed_type);
    src.push_line(&format!("private final {} {};", ty, prop.name));
}
