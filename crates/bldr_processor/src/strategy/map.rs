// Map properties: LinkedHashMap storage, and unlike sets a duplicate key is
// rejected with IllegalArgumentException rather than silently discarded.
use super::{self as strategy, MapProperty};
use crate::metadata::{Metadata, Property};
use crate::wellknown;
use bldr_emit::SourceBuilder;
use bldr_model::DeclaredType;

fn view_type(src: &mut SourceBuilder, data: &MapProperty) -> String {
    let map = src.add_type(&wellknown::java_util("Map"));
    let key = data.key.boxed_name(src);
    let value = data.value.boxed_name(src);
    format!("{}<{}, {}>", map, key, value)
}

pub(super) fn emit_field(
    src: &mut SourceBuilder,
    prop: &Property,
    data: &MapProperty,
    _meta: &Metadata,
) {
    let storage = DeclaredType::parameterized(
        wellknown::java_util("LinkedHashMap"),
        vec![data.key.boxed.clone(), data.value.boxed.clone()],
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
    data: &MapProperty,
    meta: &Metadata,
) {
    let builder = strategy::builder_type(src, meta);
    let link = strategy::getter_link(src, meta, prop);
    let key_param = data.key.parameter_type(src);
    let value_param = data.value.parameter_type(src);
    let key_boxed = data.key.boxed_name(src);
    let value_boxed = data.value.boxed_name(src);
    let preconditions = src.add_type(&wellknown::preconditions());
    let map = src.add_type(&wellknown::java_util("Map"));

    src.push_line("/**");
    src.push_line(" * Associates {@code key} with {@code value} in the map to be returned from");
    src.push_line(&format!(" * {}.", link));
    src.push_line(" * Duplicate keys are not allowed.");
    strategy::push_returns_builder_doc(src);
    match (data.key.needs_null_check(), data.value.needs_null_check()) {
        (true, true) => {
            src.push_line(" * @throws NullPointerException if {@code key} or {@code value} is null")
        }
        (true, false) => src.push_line(" * @throws NullPointerException if {@code key} is null"),
        (false, true) => src.push_line(" * @throws NullPointerException if {@code value} is null"),
        (false, false) => {}
    }
    src.push_line(" * @throws IllegalArgumentException if {@code key} is already present");
    src.push_line(" */");
    src.push_line(&format!(
        "public {} put{}({} key, {} value) {{",
        builder, prop.capitalized_name, key_param, value_param
    ));
    src.indent();
    if data.key.needs_null_check() {
        src.push_line(&format!("{}.checkNotNull(key);", preconditions));
    }
    if data.value.needs_null_check() {
        src.push_line(&format!("{}.checkNotNull(value);", preconditions));
    }
    src.push_line(&format!(
        "{}.checkArgument(!{}.containsKey(key), \"Key already present in {}: %s\", key);",
        preconditions, prop.name, prop.name
    ));
    src.push_line(&format!("{}.put(key, value);", prop.name));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    src.push_line("/**");
    src.push_line(" * Associates all of {@code map}'s keys and values in the map to be returned");
    src.push_line(&format!(" * from {}.", link));
    src.push_line(" * Duplicate keys are not allowed.");
    strategy::push_returns_builder_doc(src);
    src.push_line(" * @throws NullPointerException if {@code map} is null or contains a");
    src.push_line(" *     null key or value");
    src.push_line(" * @throws IllegalArgumentException if any key is already present");
    src.push_line(" */");
    src.push_line(&format!(
        "public {} putAll{}({}<? extends {}, ? extends {}> map) {{",
        builder, prop.capitalized_name, map, key_boxed, value_boxed
    ));
    src.indent();
    src.push_line(&format!(
        "for ({}.Entry<? extends {}, ? extends {}> entry : map.entrySet()) {{",
        map, key_boxed, value_boxed
    ));
    src.indent();
    src.push_line(&format!(
        "put{}(entry.getKey(), entry.getValue());",
        prop.capitalized_name
    ));
    src.outdent();
    src.push_line("}");
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    src.push_line("/**");
    src.push_line(" * Removes the mapping for {@code key} from the map to be returned from");
    src.push_line(&format!(" * {}.", link));
    strategy::push_returns_builder_doc(src);
    src.push_line(" * @throws IllegalArgumentException if {@code key} is not present");
    src.push_line(" */");
    src.push_line(&format!(
        "public {} remove{}({} key) {{",
        builder, prop.capitalized_name, key_param
    ));
    src.indent();
    src.push_line(&format!(
        "{}.checkArgument({}.containsKey(key), \"Key not present in {}: %s\", key);",
        preconditions, prop.name, prop.name
    ));
    src.push_line(&format!("{}.remove(key);", prop.name));
    strategy::push_return_this(src, meta);
    src.outdent();
    src.push_line("}");

    src.blank_line();
    src.push_line("/**");
    src.push_line(" * Removes all of the mappings from the map to be returned from");
    src.push_line(&format!(" * {}.", link));
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
    src.push_line(" * Returns an unmodifiable view of the map that will be returned by");
    src.push_line(&format!(" * {}.", link));
    src.push_line(" * Changes to this builder will be reflected in the view.");
    src.push_line(" */");
    src.push_line(&format!("public {} {}() {{", view, prop.getter_name));
    src.indent();
    src.push_line(&format!(
        "return {}.unmodifiableMap({});",
        collections, prop.name
    ));
    src.outdent();
    src.push_line("}");
}

pub(super) fn emit_merge_from_value(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &MapProperty,
    _meta: &Metadata,
) {
    src.push_line(&format!(
        "putAll{}(value.{}());",
        prop.capitalized_name, prop.getter_name
    ));
}

pub(super) fn emit_merge_from_builder(
    src: &mut SourceBuilder,
    prop: &Property,
    _data: &MapProperty,
    meta: &Metadata,
) {
    let cast = strategy::template_cast(src, meta);
    src.push_line(&format!(
        "putAll{}({}.{});",
        prop.capitalized_name, cast, prop.name
    ));
}

pub(super) fn emit_value_field(src: &mut SourceBuilder, prop: &Property, data: &MapProperty) {
    let view = view_type(src, data);
    src.push_line(&format!("private final {} {};", view, prop.name));
}

pub(super) fn emit_value_accessor(src: &mut SourceBuilder, prop: &Property, data: &MapProperty) {
    let view = view_type(src, data);
    strategy::push_simple_value_accessor(src, prop, &view);
}
