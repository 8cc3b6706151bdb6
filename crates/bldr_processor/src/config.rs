use bldr_emit::SourceLevel;
use bldr_model::BuilderFactory;
use serde::{Deserialize, Serialize};

/// Knobs consumed from the static-analysis front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Gates diamond-operator and `Objects.equals`/`hash` usage.
    pub source_level: SourceLevel,
    /// How generated Value and Partial obtain a fresh builder. `None` when the
    /// front end found no usable factory on the user's builder.
    pub builder_factory: Option<BuilderFactory>,
    /// Adds `@GwtCompatible` to the generated class.
    pub gwt_compatible: bool,
    /// Adds `serializable = true` to the `@GwtCompatible` annotation.
    pub gwt_serializable: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_level: SourceLevel::Java7,
            builder_factory: Some(BuilderFactory::NoArgsConstructor),
            gwt_compatible: false,
            gwt_serializable: false,
        }
    }
}
