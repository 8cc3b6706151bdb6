// Optional-wrapped scalars: the builder stores the wrapper itself, so absence
// needs no separate tracking. Both `java.util` and Guava flavors share the
// surface; only the absent-value spelling differs.
use super::{self as strategy, OptionalProperty};
use crate::metadata::{Metadata, Property};
use crate::wellknown;
use bldr_emit::SourceBuilder;

fn wrapped_type(src: &mut SourceBuilder, data: &OptionalProperty) -> String {
    let wrapper = src.add_type(&data.flavor.wrapper());
    let boxed = data.wrapped.boxed_name(src);
    format!("{}<{}>", wrapper, boxed)
}

fn absent_expr(src: &mut SourceBuilder, data: &OptionalProperty) -> String {
    let wrapper = src.add_type(&data.flavor.wrapper());
    format!("{}.{}()", wrapper, data.flavor.absent_method())
}

pub(super) fn emit_field(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &OptionalProperty,
    _meta: &Metadata,
) {
    let ty = wrapped_type(src, data);
    let absent = absent_expr(src, data);
    src.push_line(&format!("private {} {} = {};", ty, prop.name, absent));
}

pub(super) fn emit_methods(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &OptionalProperty,
    meta: &Metadata,
) {
    let builder = strategy::builder_type(src, meta);
    let link = strategy::getter_link(src, meta, prop);
    let wrapper = src.add_type(&data.flavor.wrapper());
    let param = data.wrapped.parameter_type(src);
    let boxed = data.wrapped.boxed_name(src);

    src.push_line("/**");
    src.push_line(&format!(" * Sets the value to be returned by {}.", link));
    strategy::push_returns_builder_doc(src);
    if data.wrapped.needs_null_check() {
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
    src.push_line(&format!(
        "this.{} = {}.of({});",
        prop.name, wrapper, prop.name
    ));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    src.push_line("/**");
    src.push_line(&format!(" * Sets the value to be returned by {}.", link));
    strategy::push_returns_builder_doc(src);
    src.push_line(" */");
    src.push_line(&format!(
        "public {} set{}({}<? extends {}> {}) {{",
        builder, prop.capitalized_name, wrapper, boxed, prop.name
    ));
    src.indent();
    src.push_line(&format!("if ({}.isPresent()) {{", prop.name));
    src.indent();
    src.push_line(&format!(
        "return set{}({}.get());",
        prop.capitalized_name, prop.name
    ));
    src.outdent();
    src.push_line("} else {");
    src.indent();
    src.push_line(&format!("return clear{}();", prop.capitalized_name));
    src.outdent();
    src.push_line("}");
    src.outdent();
    src.push_line("}");

    src.blank_line();
    let nullable = src.add_type(&wellknown::nullable_annotation());
    src.push_line("/**");
    src.push_line(&format!(" * Sets the value to be returned by {}.", link));
    strategy::push_returns_builder_doc(src);
    src.push_line(" */");
    src.push_line(&format!(
        "public {} setNullable{}(@{} {} {}) {{",
        builder, prop.capitalized_name, nullable, boxed, prop.name
    ));
    src.indent();
    src.push_line(&format!("if ({} != null) {{", prop.name));
    src.indent();
    src.push_line(&format!(
        "return set{}({});",
        prop.capitalized_name, prop.name
    ));
    src.outdent();
    src.push_line("} else {");
    src.indent();
    src.push_line(&format!("return clear{}();", prop.capitalized_name));
    src.outdent();
    src.push_line("}");
    src.outdent();
    src.push_line("}");

    src.blank_line();
    let absent = absent_expr(src, data);
    let absent_doc = format!(
        "{{@link {}#{}() {}.{}()}}",
        wrapper,
        data.flavor.absent_method(),
        wrapper,
        data.flavor.absent_method()
    );
    src.push_line("/**");
    src.push_line(&format!(" * Sets the value to be returned by {} to", link));
    src.push_line(&format!(" * {}.", absent_doc));
    strategy::push_returns_builder_doc(src);
    src.push_line(" */");
    src.push_line(&format!(
        "public {} clear{}() {{",
        builder, prop.capitalized_name
    ));
    src.indent();
    src.push_line(&format!("this.{} = {};", prop.name, absent));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    let ty = wrapped_type(src, data);
    src.push_line("/**");
    src.push_line(&format!(
        " * Returns the value that will be returned by {}.",
        link
    ));
    src.push_line(" */");
    src.push_line(&format!("public {} {}() {{", ty, prop.getter_name));
    src.indent();
    src.push_line(&format!("return {};", prop.name));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_merge_from_value(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &OptionalProperty,
    _meta: &Metadata,
) {
    src.push_line(&format!(
        "if (value.{}().isPresent()) {{",
        prop.getter_name
    ));
    src.indent();
    src.push_line(&format!(
        "set{}(value.{}().get());",
        prop.capitalized_name, prop.getter_name
    ));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_merge_from_builder(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &OptionalProperty,
    meta: &Metadata,
) {
    let cast = strategy::template_cast(src, meta);
    src.push_line(&format!("if ({}.{}.isPresent()) {{", cast, prop.name));
    src.indent();
    src.push_line(&format!(
        "set{}({}.{}.get());",
        prop.capitalized_name, cast, prop.name
    ));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_clear(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &OptionalProperty,
    _meta: &Metadata,
    template: Option<&str>,
) {
    match template {
        Some(template) => {
            src.push_line(&format!("{} = {}.{};", prop.name, template, prop.name));
        }
        None => {
            let absent = absent_expr(src, data);
            src.push_line(&format!("{} = {};", prop.name, absent));
        }
    }
}

pub(super) fn emit_value_field(src: &mut SourceBuilder, prop: &Property, data: &OptionalProperty) {
    let ty = wrapped_type(src, data);
    src.push_line(&format!("private final {} {};", ty, prop.name));
}

pub(super) fn emit_value_accessor(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &OptionalProperty,
) {
    let ty = wrapped_type(src, data);
    strategy::push_simple_value_accessor(src, prop, &ty);
}
