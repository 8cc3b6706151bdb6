// Immutable descriptor of one generated builder, assembled once per user
// type per generation run.
use crate::strategy::PropertyStrategy;
use bldr_model::{BuilderFactory, JavaType, PrimitiveType, StandardMethod, TypeReference};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Descriptor of one accessor. Created during classification, attached to
/// [`Metadata`], read-only thereafter. Exactly one strategy is attached; the
/// strategy alone determines every generated fragment for the property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub capitalized_name: String,
    pub all_caps_name: String,
    pub getter_name: String,
    /// The declared (boxed) type as written on the accessor.
    pub boxed_type: JavaType,
    /// The underlying primitive type, where a primitive/boxed pair exists.
    pub primitive: Option<PrimitiveType>,
    /// Whether a cast to the property's type is statically safe, or needs an
    /// unchecked suppression.
    pub fully_checked_cast: bool,
    pub strategy: PropertyStrategy,
}

/// Descriptor of one generated builder superclass.
///
/// Property order is insertion order from the user type's declared accessors
/// and is preserved verbatim into generated field and method order, so
/// `equals`/`hashCode`/`toString` argument order is stable and reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// The user's type, e.g. `Person<T>`.
    pub target: TypeReference,
    /// The user-declared builder, e.g. `Person.Builder`.
    pub builder: TypeReference,
    /// The generated superclass, e.g. `Person_Builder`.
    pub generated_builder: TypeReference,
    /// `Person_Builder.Value`.
    pub value_type: TypeReference,
    /// `Person_Builder.Partial`.
    pub partial_type: TypeReference,
    /// `Person_Builder.Property`.
    pub property_enum: TypeReference,
    pub builder_factory: Option<BuilderFactory>,
    pub interface_type: bool,
    pub gwt_compatible: bool,
    pub gwt_serializable: bool,
    pub underrides: BTreeSet<StandardMethod>,
    pub declares_to_builder: bool,
    pub properties: Vec<Property>,
}

impl Metadata {
    pub fn required_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(|p| matches!(p.strategy, PropertyStrategy::Required(_)))
    }

    pub fn has_required_properties(&self) -> bool {
        self.required_properties().next().is_some()
    }

    fn has_optional_properties(&self) -> bool {
        self.properties
            .iter()
            .any(|p| matches!(p.strategy, PropertyStrategy::Optional(_)))
    }

    /// Whether any scalar property exists that `clear()` resets by value
    /// rather than by clearing storage in place.
    pub fn has_template_reset_properties(&self) -> bool {
        self.properties.iter().any(|p| {
            matches!(
                p.strategy,
                PropertyStrategy::Required(_)
                    | PropertyStrategy::Nullable(_)
                    | PropertyStrategy::Optional(_)
                    | PropertyStrategy::Primitive(_)
            )
        })
    }

    /// Whether some generated `toString` joins fragments that may be absent,
    /// requiring the shared `COMMA_JOINER` constant. Single-property types
    /// inline the conditional instead.
    pub fn needs_comma_joiner(&self) -> bool {
        self.properties.len() >= 2
            && (self.has_optional_properties() || self.has_required_properties())
    }

    pub fn underrides(&self, method: StandardMethod) -> bool {
        self.underrides.contains(&method)
    }
}
