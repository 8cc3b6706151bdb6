// Well-known type names the generated code refers to.
use bldr_model::QualifiedName;

pub(crate) fn java_util(simple: &str) -> QualifiedName {
    QualifiedName::top_level("java.util", simple)
}

pub(crate) fn preconditions() -> QualifiedName {
    QualifiedName::top_level("com.google.common.base", "Preconditions")
}

pub(crate) fn joiner() -> QualifiedName {
    QualifiedName::top_level("com.google.common.base", "Joiner")
}

pub(crate) fn guava_optional() -> QualifiedName {
    QualifiedName::top_level("com.google.common.base", "Optional")
}

pub(crate) fn immutable_collection(simple: &str) -> QualifiedName {
    QualifiedName::top_level("com.google.common.collect", simple)
}

pub(crate) fn generated_annotation() -> QualifiedName {
    QualifiedName::top_level("javax.annotation", "Generated")
}

pub(crate) fn nullable_annotation() -> QualifiedName {
    QualifiedName::top_level("javax.annotation", "Nullable")
}

pub(crate) fn visible_for_testing() -> QualifiedName {
    QualifiedName::top_level("com.google.common.annotations", "VisibleForTesting")
}

pub(crate) fn gwt_compatible() -> QualifiedName {
    QualifiedName::top_level("com.google.common.annotations", "GwtCompatible")
}

pub(crate) fn safe_varargs() -> QualifiedName {
    QualifiedName::top_level("java.lang", "SafeVarargs")
}
