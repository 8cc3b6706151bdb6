// Set properties: LinkedHashSet storage preserves insertion order, and a
// duplicate add is silently discarded rather than rejected.
use super::{self as strategy, list, CollectionProperty};
use crate::metadata::{Metadata, Property};
use crate::wellknown;
use bldr_emit::SourceBuilder;
use bldr_model::DeclaredType;

fn view_type(src: &mut SourceBuilder, data: &CollectionProperty) -> String {
    let set = src.add_type(&wellknown::java_util("Set"));
    let element = data.element.boxed_name(src);
    format!("{}<{}>", set, element)
}

pub(super) fn emit_field(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &CollectionProperty,
    _meta: &Metadata,
) {
    let storage = DeclaredType::parameterized(
        wellknown::java_util("LinkedHashSet"),
        vec![data.element.boxed.clone()],
    );
    let declared = src.type_name(&bldr_model::JavaType::Declared(storage.clone()));
    let constructed = src.constructed_type(&storage);
    src.push_line(&format!(
        "private final {} {} = new {}();",
        declared, prop.name, constructed
    ));
}

pub(super) fn emit_methods(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &CollectionProperty,
    meta: &Metadata,
) {
    let builder = strategy::builder_type(src, meta);
    let link = strategy::getter_link(src, meta, prop);
    let element_param = data.element.parameter_type(src);
    let element_boxed = data.element.boxed_name(src);

    src.push_line("/**");
    src.push_line(&format!(
        " * Adds {{@code element}} to the set to be returned from {}.",
        link
    ));
    src.push_line(&format!(
        " * If the set already contains {{@code element}}, then {{@code add{}}}",
        prop.capitalized_name
    ));
    src.push_line(" * has no effect (only the previously added element is retained).");
    strategy::push_returns_builder_doc(src);
    if data.element.needs_null_check() {
        src.push_line(" * @throws NullPointerException if {@code element} is null");
    }
    src.push_line(" */");
    src.push_line(&format!(
        "public {} add{}({} element) {{",
        builder, prop.capitalized_name, element_param
    ));
    src.indent();
    if data.element.needs_null_check() {
        let preconditions = src.add_type(&wellknown::preconditions());
        src.push_line(&format!(
            "{}.add({}.checkNotNull(element));",
            prop.name, preconditions
        ));
    } else {
        src.push_line(&format!("{}.add(element);", prop.name));
    }
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    list::emit_varargs_add(src, prop, data, meta, "set", &builder, &link);

    src.blank_line();
    src.push_line("/**");
    src.push_line(" * Adds each element of {@code elements} to the set to be returned from");
    src.push_line(&format!(" * {}.", link));
    strategy::push_returns_builder_doc(src);
    src.push_line(" * @throws NullPointerException if {@code elements} is null or contains a");
    src.push_line(" *     null element");
    src.push_line(" */");
    src.push_line(&format!(
        "public {} addAll{}(Iterable<? extends {}> elements) {{",
        builder, prop.capitalized_name, element_boxed
    ));
    src.indent();
    src.push_line(&format!(
        "for ({} element : elements) {{",
        element_boxed
    ));
    src.indent();
    src.push_line(&format!("add{}(element);", prop.capitalized_name));
    src.outdent();
    src.push_line("}");
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    src.push_line("/**");
    src.push_line(&format!(
        " * Clears the set to be returned from {}.",
        link
    ));
    strategy::push_returns_builder_doc(src);
    src.push_line(" */");
    src.push_line(&format!(
        "public {} clear{}() {{",
        builder, prop.capitalized_name
    ));
    src.indent();
    src.push_line(&format!("{}.clear();", prop.name));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    let view = view_type(src, data);
    let collections = src.add_type(&wellknown::java_util("Collections"));
    src.push_line("/**");
    src.push_line(" * Returns an unmodifiable view of the set that will be returned by");
    src.push_line(&format!(" * {}.", link));
    src.push_line(" * Changes to this builder will be reflected in the view.");
    src.push_line(" */");
    src.push_line(&format!("public {} {}() {{", view, prop.getter_name));
    src.indent();
    src.push_line(&format!(
        "return {}.unmodifiableSet({});",
        collections, prop.name
    ));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_merge_from_value(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &CollectionProperty,
    _meta: &Metadata,
) {
    src.push_line(&format!(
        "addAll{}(value.{}());",
        prop.capitalized_name, prop.getter_name
    ));
}

pub(super) fn emit_merge_from_builder(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &CollectionProperty,
    meta: &Metadata,
) {
    let cast = strategy::template_cast(src, meta);
    src.push_line(&format!(
        "addAll{}({}.{});",
        prop.capitalized_name, cast, prop.name
    ));
}

pub(super) fn emit_value_field(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &CollectionProperty,
) {
    let view = view_type(src, data);
    src.push_line(&format!("private final {} {};", view, prop.name));
}

pub(super) fn emit_value_accessor(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &CollectionProperty,
) {
    let view = view_type(src, data);
    strategy::push_simple_value_accessor(src, prop, &view);
}
