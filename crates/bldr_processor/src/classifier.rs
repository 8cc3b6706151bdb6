// Turns a user type's accessors into a validated builder descriptor.
//
// Every accessor is classified even after one fails, so a single run reports
// every problem at once. Classification order for declared return types:
// collection erasures first, then optional wrappers, then primitives and
// registered buildables, with nullable/required scalars as the fallback.
use crate::config::GeneratorConfig;
use crate::error::{ClassifyError, Diagnostic};
use crate::metadata::{Metadata, Property};
use crate::strategy::{
    BuildableProperty, CollectionProperty, ElementType, MapProperty, NullableProperty,
    OptionalFlavor, OptionalProperty, PrimitiveProperty, PropertyStrategy, RequiredProperty,
};
use bldr_model::{
    AccessorMethod, DeclaredType, JavaType, QualifiedName, TypeReference, TypeUniverse, UserType,
};
use tracing::debug;

/// Builds the immutable [`Metadata`] descriptor for one user type, attaching
/// exactly one strategy to every property.
pub fn classify(
    user: &UserType,
    universe: &TypeUniverse,
    config: &GeneratorConfig,
) -> Result<Metadata, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    let mut properties = Vec::new();
    for accessor in &user.accessors {
        match classify_accessor(accessor, universe) {
            Ok(property) => {
                debug!(
                    accessor = %accessor.name,
                    kind = property.strategy.kind_name(),
                    "classified accessor"
                );
                properties.push(property);
            }
            Err(err) => diagnostics.push(Diagnostic::from(err)),
        }
    }
    if user.declares_to_builder && config.builder_factory.is_none() {
        diagnostics.push(Diagnostic::from(ClassifyError::MissingBuilderFactory {
            accessor: "toBuilder".to_string(),
        }));
    }
    if !diagnostics.is_empty() {
        debug!(
            target = %user.name,
            count = diagnostics.len(),
            "classification failed"
        );
        return Err(diagnostics);
    }
    let generated_name = QualifiedName::top_level(
        user.name.package(),
        format!("{}_Builder", user.name.simple_names().join("_")),
    );
    let params = user.type_params.clone();
    let reference =
        |name: QualifiedName| TypeReference::new(name, params.clone());
    Ok(Metadata {
        target: reference(user.name.clone()),
        builder: reference(user.name.nested("Builder")),
        value_type: reference(generated_name.nested("Value")),
        partial_type: reference(generated_name.nested("Partial")),
        property_enum: reference(generated_name.nested("Property")),
        generated_builder: reference(generated_name),
        builder_factory: config.builder_factory,
        interface_type: user.interface,
        gwt_compatible: config.gwt_compatible,
        gwt_serializable: config.gwt_serializable,
        underrides: user.underrides.clone(),
        declares_to_builder: user.declares_to_builder,
        properties,
    })
}

fn classify_accessor(
    accessor: &AccessorMethod,
    universe: &TypeUniverse,
) -> Result<Property, ClassifyError> {
    let strategy = classify_return_type(accessor, universe)?;
    let name = field_name(&accessor.name);
    let boxed_type = match &accessor.return_type {
        JavaType::Primitive(primitive) => JavaType::declared(primitive.boxed()),
        other => other.clone(),
    };
    Ok(Property {
        capitalized_name: capitalize(&name),
        all_caps_name: all_caps_name(&name),
        getter_name: accessor.name.clone(),
        primitive: strategy.primitive(),
        fully_checked_cast: accessor.return_type.is_fully_checked(),
        name,
        boxed_type,
        strategy,
    })
}

fn classify_return_type(
    accessor: &AccessorMethod,
    universe: &TypeUniverse,
) -> Result<PropertyStrategy, ClassifyError> {
    match &accessor.return_type {
        JavaType::Primitive(primitive) => Ok(PropertyStrategy::Primitive(PrimitiveProperty {
            primitive: *primitive,
        })),
        // Type variables behave as required scalars; the cast in the value
        // constructor is unchecked.
        JavaType::Variable(_) => Ok(PropertyStrategy::Required(RequiredProperty {
            scalar: ElementType {
                boxed: accessor.return_type.clone(),
                primitive: None,
            },
        })),
        JavaType::Wildcard { .. } => Err(ClassifyError::Unclassifiable {
            accessor: accessor.name.clone(),
            type_name: "?".to_string(),
        }),
        JavaType::Declared(decl) => classify_declared(accessor, decl, universe),
    }
}

fn classify_declared(
    accessor: &AccessorMethod,
    decl: &DeclaredType,
    universe: &TypeUniverse,
) -> Result<PropertyStrategy, ClassifyError> {
    match decl.name.qualified().as_str() {
        "java.util.List" => {
            let element = single_argument(accessor, decl, "element")?;
            Ok(PropertyStrategy::List(CollectionProperty {
                element: ElementType::of(element, universe),
            }))
        }
        "java.util.Set" => {
            let element = single_argument(accessor, decl, "element")?;
            Ok(PropertyStrategy::Set(CollectionProperty {
                element: ElementType::of(element, universe),
            }))
        }
        "java.util.Map" => {
            let (key, value) = pair_arguments(accessor, decl)?;
            Ok(PropertyStrategy::Map(MapProperty {
                key: ElementType::of(key, universe),
                value: ElementType::of(value, universe),
            }))
        }
        "java.util.Optional" => classify_optional(accessor, decl, universe, OptionalFlavor::JavaUtil),
        "com.google.common.base.Optional" => {
            classify_optional(accessor, decl, universe, OptionalFlavor::Guava)
        }
        _ => {
            if let Some(buildable) = universe.buildable(&decl.name) {
                return Ok(PropertyStrategy::Buildable(BuildableProperty {
                    buildable: buildable.clone(),
                }));
            }
            if accessor.nullable {
                return Ok(PropertyStrategy::Nullable(NullableProperty {
                    scalar_type: accessor.return_type.clone(),
                }));
            }
            Ok(PropertyStrategy::Required(RequiredProperty {
                scalar: ElementType::of(accessor.return_type.clone(), universe),
            }))
        }
    }
}

fn classify_optional(
    accessor: &AccessorMethod,
    decl: &DeclaredType,
    universe: &TypeUniverse,
    flavor: OptionalFlavor,
) -> Result<PropertyStrategy, ClassifyError> {
    let wrapped = single_argument(accessor, decl, "wrapped")?;
    Ok(PropertyStrategy::Optional(OptionalProperty {
        wrapped: ElementType::of(wrapped, universe),
        flavor,
    }))
}

fn single_argument(
    accessor: &AccessorMethod,
    decl: &DeclaredType,
    position: &str,
) -> Result<JavaType, ClassifyError> {
    if decl.args.is_empty() {
        return Err(ClassifyError::RawCollection {
            accessor: accessor.name.clone(),
            collection: decl.name.simple_name().to_string(),
        });
    }
    if decl.args.len() != 1 {
        return Err(ClassifyError::GenericArity {
            accessor: accessor.name.clone(),
            type_name: decl.name.simple_name().to_string(),
            expected: 1,
            found: decl.args.len(),
        });
    }
    resolve_argument(accessor, &decl.args[0], position)
}

fn pair_arguments(
    accessor: &AccessorMethod,
    decl: &DeclaredType,
) -> Result<(JavaType, JavaType), ClassifyError> {
    if decl.args.is_empty() {
        return Err(ClassifyError::RawCollection {
            accessor: accessor.name.clone(),
            collection: decl.name.simple_name().to_string(),
        });
    }
    if decl.args.len() != 2 {
        return Err(ClassifyError::GenericArity {
            accessor: accessor.name.clone(),
            type_name: decl.name.simple_name().to_string(),
            expected: 2,
            found: decl.args.len(),
        });
    }
    let key = resolve_argument(accessor, &decl.args[0], "key")?;
    let value = resolve_argument(accessor, &decl.args[1], "value")?;
    Ok((key, value))
}

/// Resolves one type argument to the property type it contributes.
/// `? extends Bound` resolves to its bound; an unbounded wildcard has no
/// usable type and is rejected.
fn resolve_argument(
    accessor: &AccessorMethod,
    arg: &JavaType,
    position: &str,
) -> Result<JavaType, ClassifyError> {
    match arg {
        JavaType::Wildcard {
            extends_bound: Some(bound),
        } => resolve_argument(accessor, bound, position),
        JavaType::Wildcard {
            extends_bound: None,
        } => Err(ClassifyError::UnboundedWildcard {
            accessor: accessor.name.clone(),
            position: position.to_string(),
        }),
        other => Ok(other.clone()),
    }
}

/// Derives the property name from its accessor: `getFoo`/`isFoo` become
/// `foo`, anything else is used as written.
pub(crate) fn field_name(getter: &str) -> String {
    for prefix in ["get", "is"] {
        if let Some(rest) = getter.strip_prefix(prefix) {
            if rest.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
                return decapitalize(rest);
            }
        }
    }
    getter.to_string()
}

fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// `pageCount` becomes `PAGE_COUNT`.
pub(crate) fn all_caps_name(name: &str) -> String {
    let mut out = String::new();
    for ch in name.chars() {
        if ch.is_ascii_uppercase() && !out.is_empty() {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}
