// Per-kind code-generation strategies, dispatched as a closed sum type.
//
// Exactly one variant is attached to each property at classification time and
// never changes. The variant alone determines the builder field, the mutator
// surface, merge and clear logic, and build-time finalization for that
// property.
use crate::metadata::{Metadata, Property};
use crate::wellknown;
use bldr_emit::SourceBuilder;
use bldr_model::{BuildableType, JavaType, PrimitiveType, QualifiedName, TypeReference, TypeUniverse};
use serde::{Deserialize, Serialize};

mod buildable;
mod list;
mod map;
mod nullable;
mod optional;
mod primitive;
mod required;
mod set;

/// A scalar, element, key, or value position that may have a primitive
/// spelling. Where a primitive/boxed pair exists, mutator parameters use the
/// primitive keyword and the null check on that parameter is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementType {
    pub boxed: JavaType,
    pub primitive: Option<PrimitiveType>,
}

impl ElementType {
    /// Pairs a boxed type with its primitive counterpart when one exists.
    pub fn of(boxed: JavaType, universe: &TypeUniverse) -> Self {
        let primitive = boxed.as_declared().and_then(|decl| {
            if decl.is_raw() {
                universe.primitive_for(&decl.name)
            } else {
                None
            }
        });
        Self { boxed, primitive }
    }

    pub(crate) fn parameter_type(&self, src: &mut SourceBuilder) -> String {
        match self.primitive {
            Some(primitive) => primitive.keyword().to_string(),
            None => src.type_name(&self.boxed),
        }
    }

    pub(crate) fn boxed_name(&self, src: &mut SourceBuilder) -> String {
        src.type_name(&self.boxed)
    }

    pub(crate) fn needs_null_check(&self) -> bool {
        self.primitive.is_none()
    }
}

/// Which optional wrapper the accessor uses; decides the `empty()` versus
/// `absent()` spelling at emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionalFlavor {
    JavaUtil,
    Guava,
}

impl OptionalFlavor {
    pub(crate) fn wrapper(self) -> QualifiedName {
        match self {
            OptionalFlavor::JavaUtil => wellknown::java_util("Optional"),
            OptionalFlavor::Guava => wellknown::guava_optional(),
        }
    }

    pub(crate) fn absent_method(self) -> &'static str {
        match self {
            OptionalFlavor::JavaUtil => "empty",
            OptionalFlavor::Guava => "absent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredProperty {
    pub scalar: ElementType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullableProperty {
    pub scalar_type: JavaType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveProperty {
    pub primitive: PrimitiveType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalProperty {
    pub wrapped: ElementType,
    pub flavor: OptionalFlavor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionProperty {
    pub element: ElementType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapProperty {
    pub key: ElementType,
    pub value: ElementType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildableProperty {
    pub buildable: BuildableType,
}

/// Closed set of property kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyStrategy {
    Required(RequiredProperty),
    Nullable(NullableProperty),
    Optional(OptionalProperty),
    Primitive(PrimitiveProperty),
    List(CollectionProperty),
    Set(CollectionProperty),
    Map(MapProperty),
    Buildable(BuildableProperty),
}

/// One property's contribution to a generated `equals`, in positive and
/// negated spellings. Java 6 emits per-property `if (!...)` blocks; Java 7
/// joins the positive forms with `&&`.
pub(crate) struct EqualsComparison {
    pub positive: String,
    pub negated: String,
}

/// One property's contribution to a generated `toString`.
pub(crate) struct ToStringFragment {
    pub label: String,
    pub value_expr: String,
    /// When present, the fragment is omitted unless the condition holds.
    pub condition: Option<String>,
}

impl PropertyStrategy {
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyStrategy::Required(_) => "required scalar",
            PropertyStrategy::Nullable(_) => "nullable",
            PropertyStrategy::Optional(_) => "optional",
            PropertyStrategy::Primitive(_) => "primitive",
            PropertyStrategy::List(_) => "list",
            PropertyStrategy::Set(_) => "set",
            PropertyStrategy::Map(_) => "map",
            PropertyStrategy::Buildable(_) => "buildable",
        }
    }

    /// The underlying primitive type, where one applies to this kind.
    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            PropertyStrategy::Primitive(data) => Some(data.primitive),
            PropertyStrategy::Required(data) => data.scalar.primitive,
            PropertyStrategy::Optional(data) => data.wrapped.primitive,
            _ => None,
        }
    }

    pub(crate) fn emit_field(&self, src: &mut SourceBuilder, prop: &Property, meta: &Metadata) {
        match self {
            PropertyStrategy::Required(data) => required::emit_field(src, prop, data, meta),
            PropertyStrategy::Nullable(data) => nullable::emit_field(src, prop, data, meta),
            PropertyStrategy::Optional(data) => optional::emit_field(src, prop, data, meta),
            PropertyStrategy::Primitive(data) => primitive::emit_field(src, prop, data, meta),
            PropertyStrategy::List(data) => list::emit_field(src, prop, data, meta),
            PropertyStrategy::Set(data) => set::emit_field(src, prop, data, meta),
            PropertyStrategy::Map(data) => map::emit_field(src, prop, data, meta),
            PropertyStrategy::Buildable(data) => buildable::emit_field(src, prop, data, meta),
        }
    }

    pub(crate) fn emit_methods(&self, src: &mut SourceBuilder, prop: &Property, meta: &Metadata) {
        match self {
            PropertyStrategy::Required(data) => required::emit_methods(src, prop, data, meta),
            PropertyStrategy::Nullable(data) => nullable::emit_methods(src, prop, data, meta),
            PropertyStrategy::Optional(data) => optional::emit_methods(src, prop, data, meta),
            PropertyStrategy::Primitive(data) => primitive::emit_methods(src, prop, data, meta),
            PropertyStrategy::List(data) => list::emit_methods(src, prop, data, meta),
            PropertyStrategy::Set(data) => set::emit_methods(src, prop, data, meta),
            PropertyStrategy::Map(data) => map::emit_methods(src, prop, data, meta),
            PropertyStrategy::Buildable(data) => buildable::emit_methods(src, prop, data, meta),
        }
    }

    pub(crate) fn emit_merge_from_value(
        &self,
        src: &mut SourceBuilder,
        prop: &Property,
        meta: &Metadata,
    ) {
        match self {
            PropertyStrategy::Required(data) => required::emit_merge_from_value(src, prop, data, meta),
            PropertyStrategy::Nullable(data) => nullable::emit_merge_from_value(src, prop, data, meta),
            PropertyStrategy::Optional(data) => optional::emit_merge_from_value(src, prop, data, meta),
            PropertyStrategy::Primitive(data) => {
                primitive::emit_merge_from_value(src, prop, data, meta)
            }
            PropertyStrategy::List(data) => list::emit_merge_from_value(src, prop, data, meta),
            PropertyStrategy::Set(data) => set::emit_merge_from_value(src, prop, data, meta),
            PropertyStrategy::Map(data) => map::emit_merge_from_value(src, prop, data, meta),
            PropertyStrategy::Buildable(data) => {
                buildable::emit_merge_from_value(src, prop, data, meta)
            }
        }
    }

    pub(crate) fn emit_merge_from_builder(
        &self,
        src: &mut SourceBuilder,
        prop: &Property,
        meta: &Metadata,
    ) {
        match self {
            PropertyStrategy::Required(data) => {
                required::emit_merge_from_builder(src, prop, data, meta)
            }
            PropertyStrategy::Nullable(data) => {
                nullable::emit_merge_from_builder(src, prop, data, meta)
            }
            PropertyStrategy::Optional(data) => {
                optional::emit_merge_from_builder(src, prop, data, meta)
            }
            PropertyStrategy::Primitive(data) => {
                primitive::emit_merge_from_builder(src, prop, data, meta)
            }
            PropertyStrategy::List(data) => list::emit_merge_from_builder(src, prop, data, meta),
            PropertyStrategy::Set(data) => set::emit_merge_from_builder(src, prop, data, meta),
            PropertyStrategy::Map(data) => map::emit_merge_from_builder(src, prop, data, meta),
            PropertyStrategy::Buildable(data) => {
                buildable::emit_merge_from_builder(src, prop, data, meta)
            }
        }
    }

    /// Emits the property's statements inside the builder's `clear()`.
    /// `template` names a freshly constructed builder when defaults set by the
    /// user's constructor should survive.
    pub(crate) fn emit_clear(
        &self,
        src: &mut SourceBuilder,
        prop: &Property,
        meta: &Metadata,
        template: Option<&str>,
    ) {
        match self {
            PropertyStrategy::Required(data) => required::emit_clear(src, prop, data, meta, template),
            PropertyStrategy::Nullable(data) => nullable::emit_clear(src, prop, data, meta, template),
            PropertyStrategy::Optional(data) => optional::emit_clear(src, prop, data, meta, template),
            PropertyStrategy::Primitive(data) => {
                primitive::emit_clear(src, prop, data, meta, template)
            }
            PropertyStrategy::List(_) | PropertyStrategy::Set(_) | PropertyStrategy::Map(_) => {
                src.push_line(&format!("{}.clear();", prop.name));
            }
            PropertyStrategy::Buildable(_) => {
                src.push_line(&format!("{}.clear();", prop.name));
            }
        }
    }

    /// Emits the storage field inside Value/Partial.
    pub(crate) fn emit_value_field(&self, src: &mut SourceBuilder, prop: &Property) {
        match self {
            PropertyStrategy::Required(data) => required::emit_value_field(src, prop, data),
            PropertyStrategy::Nullable(data) => nullable::emit_value_field(src, prop, data),
            PropertyStrategy::Optional(data) => optional::emit_value_field(src, prop, data),
            PropertyStrategy::Primitive(data) => primitive::emit_value_field(src, prop, data),
            PropertyStrategy::List(data) => list::emit_value_field(src, prop, data),
            PropertyStrategy::Set(data) => set::emit_value_field(src, prop, data),
            PropertyStrategy::Map(data) => map::emit_value_field(src, prop, data),
            PropertyStrategy::Buildable(data) => buildable::emit_value_field(src, prop, data),
        }
    }

    /// Emits the constructor assignment inside Value/Partial; build-time
    /// finalization (unmodifiable deep copies, nested builds) happens here.
    pub(crate) fn emit_value_assignment(
        &self,
        src: &mut SourceBuilder,
        prop: &Property,
        partial: bool,
    ) {
        match self {
            PropertyStrategy::List(_) => {
                let copy = src.add_type(&wellknown::immutable_collection("ImmutableList"));
                src.push_line(&format!(
                    "this.{} = {}.copyOf(builder.{});",
                    prop.name, copy, prop.name
                ));
            }
            PropertyStrategy::Set(_) => {
                let copy = src.add_type(&wellknown::immutable_collection("ImmutableSet"));
                src.push_line(&format!(
                    "this.{} = {}.copyOf(builder.{});",
                    prop.name, copy, prop.name
                ));
            }
            PropertyStrategy::Map(_) => {
                let copy = src.add_type(&wellknown::immutable_collection("ImmutableMap"));
                src.push_line(&format!(
                    "this.{} = {}.copyOf(builder.{});",
                    prop.name, copy, prop.name
                ));
            }
            PropertyStrategy::Buildable(_) => {
                let build = if partial { "buildPartial" } else { "build" };
                src.push_line(&format!(
                    "this.{} = builder.{}.{}();",
                    prop.name, prop.name, build
                ));
            }
            _ => {
                src.push_line(&format!("this.{} = builder.{};", prop.name, prop.name));
            }
        }
    }

    /// Emits the overriding accessor inside Value/Partial.
    pub(crate) fn emit_value_accessor(
        &self,
        src: &mut SourceBuilder,
        prop: &Property,
        meta: &Metadata,
        partial: bool,
    ) {
        match self {
            PropertyStrategy::Required(data) => {
                required::emit_value_accessor(src, prop, data, meta, partial)
            }
            PropertyStrategy::Nullable(data) => nullable::emit_value_accessor(src, prop, data),
            PropertyStrategy::Optional(data) => optional::emit_value_accessor(src, prop, data),
            PropertyStrategy::Primitive(data) => primitive::emit_value_accessor(src, prop, data),
            PropertyStrategy::List(data) => list::emit_value_accessor(src, prop, data),
            PropertyStrategy::Set(data) => set::emit_value_accessor(src, prop, data),
            PropertyStrategy::Map(data) => map::emit_value_accessor(src, prop, data),
            PropertyStrategy::Buildable(_) => {
                let boxed = src.type_name(&prop.boxed_type);
                push_simple_value_accessor(src, prop, &boxed);
            }
        }
    }

    pub(crate) fn equals_comparison(
        &self,
        src: &mut SourceBuilder,
        prop: &Property,
        partial: bool,
    ) -> EqualsComparison {
        match self {
            PropertyStrategy::Primitive(_) => primitive_comparison(&prop.name),
            PropertyStrategy::Nullable(_) => null_safe_comparison(src, &prop.name),
            // A partial may hold an unset (null) required field.
            PropertyStrategy::Required(_) if partial => null_safe_comparison(src, &prop.name),
            _ => reference_comparison(src, &prop.name),
        }
    }

    pub(crate) fn to_string_fragment(
        &self,
        src: &mut SourceBuilder,
        prop: &Property,
        meta: &Metadata,
        partial: bool,
    ) -> ToStringFragment {
        match self {
            PropertyStrategy::Optional(_) => ToStringFragment {
                label: prop.name.clone(),
                value_expr: format!("{}.get()", prop.name),
                condition: Some(format!("{}.isPresent()", prop.name)),
            },
            PropertyStrategy::Required(_) if partial => {
                let constant = property_enum_constant(src, meta, prop);
                ToStringFragment {
                    label: prop.name.clone(),
                    value_expr: prop.name.clone(),
                    condition: Some(format!("!_unsetProperties.contains({})", constant)),
                }
            }
            _ => ToStringFragment {
                label: prop.name.clone(),
                value_expr: prop.name.clone(),
                condition: None,
            },
        }
    }
}

// Shared rendering helpers used across the kind modules.

/// The user's builder type, e.g. `Person.Builder<T>`.
pub(crate) fn builder_type(src: &mut SourceBuilder, meta: &Metadata) -> String {
    format!(
        "{}{}",
        src.add_type(&meta.builder.name),
        meta.builder.params_suffix()
    )
}

/// Emits the chained-mutator return: `return (Person.Builder) this;`.
pub(crate) fn push_return_this(src: &mut SourceBuilder, meta: &Metadata) {
    let builder = builder_type(src, meta);
    src.push_line(&format!("return ({}) this;", builder));
}

/// Javadoc link to the user's accessor, e.g. `{@link Person#getName()}`.
pub(crate) fn getter_link(src: &mut SourceBuilder, meta: &Metadata, prop: &Property) -> String {
    format!(
        "{{@link {}#{}()}}",
        src.add_type(&meta.target.name),
        prop.getter_name
    )
}

/// Downcast of another builder to the generated superclass, giving direct
/// access to its storage: `((Person_Builder) template)`.
pub(crate) fn template_cast(src: &mut SourceBuilder, meta: &Metadata) -> String {
    format!(
        "(({}{}) template)",
        src.add_type(&meta.generated_builder.name),
        meta.generated_builder.params_suffix()
    )
}

/// `Person_Builder.Property.NAME`.
pub(crate) fn property_enum_constant(
    src: &mut SourceBuilder,
    meta: &Metadata,
    prop: &Property,
) -> String {
    format!(
        "{}.{}",
        src.add_type(&meta.property_enum.name),
        prop.all_caps_name
    )
}

/// Generic suffix of a `new` expression for a generated type reference.
pub(crate) fn constructed_params(src: &SourceBuilder, reference: &TypeReference) -> String {
    if reference.type_params.is_empty() {
        String::new()
    } else if src.level().supports_diamond_operator() {
        "<>".to_string()
    } else {
        reference.params_suffix()
    }
}

pub(crate) fn push_simple_value_accessor(
    src: &mut SourceBuilder,
    prop: &Property,
    return_type: &str,
) {
    src.push_line("@Override");
    src.push_line(&format!("public {} {}() {{", return_type, prop.getter_name));
    src.indent();
    src.push_line(&format!("return {};", prop.name));
    src.outdent();
    src.push_line("}");
}

pub(crate) fn reference_comparison(src: &mut SourceBuilder, field: &str) -> EqualsComparison {
    if src.level().has_java_util_objects() {
        let objects = src.add_type(&wellknown::java_util("Objects"));
        EqualsComparison {
            positive: format!("{}.equals({}, other.{})", objects, field, field),
            negated: format!("!{}.equals({}, other.{})", objects, field, field),
        }
    } else {
        EqualsComparison {
            positive: format!("{}.equals(other.{})", field, field),
            negated: format!("!{}.equals(other.{})", field, field),
        }
    }
}

pub(crate) fn null_safe_comparison(src: &mut SourceBuilder, field: &str) -> EqualsComparison {
    if src.level().has_java_util_objects() {
        return reference_comparison(src, field);
    }
    EqualsComparison {
        positive: format!(
            "({} == null ? other.{} == null : {}.equals(other.{}))",
            field, field, field, field
        ),
        negated: format!(
            "!({} == null ? other.{} == null : {}.equals(other.{}))",
            field, field, field, field
        ),
    }
}

pub(crate) fn primitive_comparison(field: &str) -> EqualsComparison {
    EqualsComparison {
        positive: format!("{} == other.{}", field, field),
        negated: format!("{} != other.{}", field, field),
    }
}

/// `" * @return this {@code Builder} object"`, shared by every mutator.
pub(crate) fn push_returns_builder_doc(src: &mut SourceBuilder) {
    src.push_line(" *");
    src.push_line(" * @return this {@code Builder} object");
}
