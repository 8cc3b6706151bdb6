use crate::classifier;
use crate::{generate, GeneratorConfig, PropertyStrategy, SourceLevel};
use bldr_model::{
    AccessorMethod, BuildableType, BuilderFactory, JavaType, PrimitiveType, QualifiedName,
    StandardMethod, TypeUniverse, UserType,
};

fn person(accessors: Vec<AccessorMethod>) -> UserType {
    let mut user = UserType::new(QualifiedName::top_level("com.example", "Person"));
    user.accessors = accessors;
    user
}

fn string_type() -> JavaType {
    JavaType::declared(QualifiedName::top_level("java.lang", "String"))
}

fn integer_type() -> JavaType {
    JavaType::declared(QualifiedName::top_level("java.lang", "Integer"))
}

fn list_of(element: JavaType) -> JavaType {
    JavaType::parameterized(QualifiedName::top_level("java.util", "List"), vec![element])
}

fn set_of(element: JavaType) -> JavaType {
    JavaType::parameterized(QualifiedName::top_level("java.util", "Set"), vec![element])
}

fn map_of(key: JavaType, value: JavaType) -> JavaType {
    JavaType::parameterized(
        QualifiedName::top_level("java.util", "Map"),
        vec![key, value],
    )
}

fn java_util_optional_of(wrapped: JavaType) -> JavaType {
    JavaType::parameterized(
        QualifiedName::top_level("java.util", "Optional"),
        vec![wrapped],
    )
}

fn guava_optional_of(wrapped: JavaType) -> JavaType {
    JavaType::parameterized(
        QualifiedName::top_level("com.google.common.base", "Optional"),
        vec![wrapped],
    )
}

fn config_at(level: SourceLevel) -> GeneratorConfig {
    GeneratorConfig {
        source_level: level,
        ..GeneratorConfig::default()
    }
}

fn generate_at(user: &UserType, level: SourceLevel) -> String {
    generate(user, &TypeUniverse::new(), &config_at(level))
        .unwrap_or_else(|diagnostics| panic!("generation failed: {:?}", diagnostics))
}

fn generate_default(user: &UserType) -> String {
    generate_at(user, SourceLevel::Java7)
}

mod naming {
    use crate::classifier::{all_caps_name, capitalize, field_name};
    use test_case::test_case;

    #[test_case("getName", "name"; "get prefix is stripped")]
    #[test_case("isEmpty", "empty"; "is prefix is stripped")]
    #[test_case("name", "name"; "bare name is kept")]
    #[test_case("getter", "getter"; "lowercase after prefix keeps whole name")]
    #[test_case("getURL", "uRL"; "only the first letter is decapitalized")]
    fn derives_field_name(getter: &str, expected: &str) {
        assert_eq!(field_name(getter), expected);
    }

    #[test_case("name", "NAME")]
    #[test_case("pageCount", "PAGE_COUNT")]
    #[test_case("aBC", "A_B_C")]
    fn derives_all_caps_name(name: &str, expected: &str) {
        assert_eq!(all_caps_name(name), expected);
    }

    #[test]
    fn capitalizes_for_mutator_names() {
        assert_eq!(capitalize("pageCount"), "PageCount");
    }
}

mod classification {
    use super::*;

    fn classify_single(accessor: AccessorMethod) -> crate::Metadata {
        let user = person(vec![accessor]);
        classifier::classify(&user, &TypeUniverse::new(), &GeneratorConfig::default())
            .expect("classification failed")
    }

    #[test]
    fn plain_declared_type_is_required() {
        let metadata = classify_single(AccessorMethod::new("getName", string_type()));
        assert!(matches!(
            metadata.properties[0].strategy,
            PropertyStrategy::Required(_)
        ));
        assert_eq!(metadata.properties[0].name, "name");
        assert_eq!(metadata.properties[0].getter_name, "getName");
    }

    #[test]
    fn boxed_type_with_primitive_pair_keeps_the_pair() {
        let metadata = classify_single(AccessorMethod::new("getAge", integer_type()));
        assert_eq!(metadata.properties[0].primitive, Some(PrimitiveType::Int));
    }

    #[test]
    fn primitive_return_is_primitive_kind() {
        let metadata = classify_single(AccessorMethod::new(
            "getAge",
            JavaType::Primitive(PrimitiveType::Int),
        ));
        assert!(matches!(
            metadata.properties[0].strategy,
            PropertyStrategy::Primitive(_)
        ));
    }

    #[test]
    fn nullable_accessor_is_nullable_kind() {
        let metadata = classify_single(AccessorMethod::nullable("getName", string_type()));
        assert!(matches!(
            metadata.properties[0].strategy,
            PropertyStrategy::Nullable(_)
        ));
    }

    #[test]
    fn collection_erasures_win() {
        let list = classify_single(AccessorMethod::new("getTags", list_of(string_type())));
        let set = classify_single(AccessorMethod::new("getTags", set_of(string_type())));
        let map = classify_single(AccessorMethod::new(
            "getCounts",
            map_of(string_type(), integer_type()),
        ));
        assert!(matches!(
            list.properties[0].strategy,
            PropertyStrategy::List(_)
        ));
        assert!(matches!(set.properties[0].strategy, PropertyStrategy::Set(_)));
        assert!(matches!(map.properties[0].strategy, PropertyStrategy::Map(_)));
    }

    #[test]
    fn optional_flavors_are_distinguished() {
        let java_util = classify_single(AccessorMethod::new(
            "getName",
            java_util_optional_of(string_type()),
        ));
        let guava = classify_single(AccessorMethod::new(
            "getName",
            guava_optional_of(string_type()),
        ));
        match &java_util.properties[0].strategy {
            PropertyStrategy::Optional(data) => {
                assert_eq!(data.flavor, crate::OptionalFlavor::JavaUtil)
            }
            other => panic!("expected optional, got {:?}", other),
        }
        match &guava.properties[0].strategy {
            PropertyStrategy::Optional(data) => {
                assert_eq!(data.flavor, crate::OptionalFlavor::Guava)
            }
            other => panic!("expected optional, got {:?}", other),
        }
    }

    #[test]
    fn wildcard_extends_argument_resolves_to_its_bound() {
        let metadata = classify_single(AccessorMethod::new(
            "getTags",
            list_of(JavaType::wildcard_extends(string_type())),
        ));
        match &metadata.properties[0].strategy {
            PropertyStrategy::List(data) => assert_eq!(data.element.boxed, string_type()),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn type_variable_is_required_with_unchecked_cast() {
        let mut user = person(vec![AccessorMethod::new(
            "getId",
            JavaType::Variable("T".to_string()),
        )]);
        user.type_params = vec!["T".to_string()];
        let metadata =
            classifier::classify(&user, &TypeUniverse::new(), &GeneratorConfig::default())
                .expect("classification failed");
        assert!(matches!(
            metadata.properties[0].strategy,
            PropertyStrategy::Required(_)
        ));
        assert!(!metadata.properties[0].fully_checked_cast);
    }

    #[test]
    fn registered_buildable_is_buildable_kind() {
        let mut universe = TypeUniverse::new();
        let address = QualifiedName::top_level("com.example", "Address");
        universe.register_buildable(BuildableType {
            builder: address.nested("Builder"),
            target: address.clone(),
            factory: BuilderFactory::NoArgsConstructor,
        });
        let user = person(vec![AccessorMethod::new(
            "getAddress",
            JavaType::declared(address),
        )]);
        let metadata = classifier::classify(&user, &universe, &GeneratorConfig::default())
            .expect("classification failed");
        assert!(matches!(
            metadata.properties[0].strategy,
            PropertyStrategy::Buildable(_)
        ));
    }

    #[test]
    fn optional_of_buildable_stays_optional() {
        let mut universe = TypeUniverse::new();
        let address = QualifiedName::top_level("com.example", "Address");
        universe.register_buildable(BuildableType {
            builder: address.nested("Builder"),
            target: address.clone(),
            factory: BuilderFactory::NoArgsConstructor,
        });
        let user = person(vec![AccessorMethod::new(
            "getAddress",
            guava_optional_of(JavaType::declared(address)),
        )]);
        let metadata = classifier::classify(&user, &universe, &GeneratorConfig::default())
            .expect("classification failed");
        assert!(matches!(
            metadata.properties[0].strategy,
            PropertyStrategy::Optional(_)
        ));
    }

    #[test]
    fn property_order_follows_declaration_order() {
        let user = person(vec![
            AccessorMethod::new("getName", string_type()),
            AccessorMethod::new("getAge", JavaType::Primitive(PrimitiveType::Int)),
            AccessorMethod::new("getTags", list_of(string_type())),
        ]);
        let metadata =
            classifier::classify(&user, &TypeUniverse::new(), &GeneratorConfig::default())
                .expect("classification failed");
        let names: Vec<&str> = metadata.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["name", "age", "tags"]);
    }

    #[test]
    fn raw_collection_is_rejected() {
        let user = person(vec![AccessorMethod::new(
            "getTags",
            JavaType::declared(QualifiedName::top_level("java.util", "List")),
        )]);
        let diagnostics =
            classifier::classify(&user, &TypeUniverse::new(), &GeneratorConfig::default())
                .unwrap_err();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].subject, "getTags");
        assert!(diagnostics[0].message.contains("raw List"));
    }

    #[test]
    fn unbounded_wildcard_argument_is_rejected() {
        let user = person(vec![AccessorMethod::new(
            "getCounts",
            map_of(JavaType::wildcard(), integer_type()),
        )]);
        let diagnostics =
            classifier::classify(&user, &TypeUniverse::new(), &GeneratorConfig::default())
                .unwrap_err();
        assert!(diagnostics[0].message.contains("key position"));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let user = person(vec![AccessorMethod::new(
            "getCounts",
            JavaType::parameterized(
                QualifiedName::top_level("java.util", "Map"),
                vec![string_type()],
            ),
        )]);
        let diagnostics =
            classifier::classify(&user, &TypeUniverse::new(), &GeneratorConfig::default())
                .unwrap_err();
        assert!(diagnostics[0].message.contains("expected 2"));
    }

    #[test]
    fn every_failing_accessor_is_reported() {
        let user = person(vec![
            AccessorMethod::new(
                "getTags",
                JavaType::declared(QualifiedName::top_level("java.util", "List")),
            ),
            AccessorMethod::new("getName", string_type()),
            AccessorMethod::new("getThing", JavaType::wildcard()),
        ]);
        let diagnostics =
            classifier::classify(&user, &TypeUniverse::new(), &GeneratorConfig::default())
                .unwrap_err();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].subject, "getTags");
        assert_eq!(diagnostics[1].subject, "getThing");
    }

    #[test]
    fn to_builder_without_factory_is_rejected() {
        let mut user = person(vec![AccessorMethod::new("getName", string_type())]);
        user.declares_to_builder = true;
        let config = GeneratorConfig {
            builder_factory: None,
            ..GeneratorConfig::default()
        };
        let diagnostics =
            classifier::classify(&user, &TypeUniverse::new(), &config).unwrap_err();
        assert_eq!(diagnostics[0].subject, "toBuilder");
        assert!(diagnostics[0].message.contains("builder factory"));
    }
}

mod required_properties {
    use super::*;

    fn two_required() -> UserType {
        person(vec![
            AccessorMethod::new("getName", string_type()),
            AccessorMethod::new("getEmail", string_type()),
        ])
    }

    #[test]
    fn tracked_in_a_property_enum() {
        let source = generate_default(&two_required());
        assert!(source.contains("private enum Property {"));
        assert!(source.contains("NAME(\"name\"),"));
        assert!(source.contains("EMAIL(\"email\"),"));
        assert!(source.contains(
            "private final EnumSet<Person_Builder.Property> _unsetProperties = \
             EnumSet.allOf(Person_Builder.Property.class);"
        ));
    }

    #[test]
    fn setter_marks_the_property_set() {
        let source = generate_default(&two_required());
        assert!(source.contains("this.name = Preconditions.checkNotNull(name);"));
        assert!(source.contains("_unsetProperties.remove(Person_Builder.Property.NAME);"));
    }

    #[test]
    fn builder_getter_rejects_unset_reads() {
        let source = generate_default(&two_required());
        assert!(source.contains(
            "Preconditions.checkState(!_unsetProperties.contains(Person_Builder.Property.NAME), \
             \"name not set\");"
        ));
    }

    #[test]
    fn build_checks_all_properties_set() {
        let source = generate_default(&two_required());
        assert!(source.contains(
            "Preconditions.checkState(_unsetProperties.isEmpty(), \"Not set: %s\", \
             _unsetProperties);"
        ));
        assert!(source.contains(" * @throws IllegalStateException if any field has not been set"));
    }

    #[test]
    fn merge_from_builder_skips_unset_properties() {
        let source = generate_default(&two_required());
        assert!(source.contains(
            "if (!((Person_Builder) template)._unsetProperties.contains(\
             Person_Builder.Property.NAME)) {"
        ));
    }

    #[test]
    fn partial_accessor_throws_when_unset() {
        let source = generate_default(&two_required());
        assert!(source.contains("throw new UnsupportedOperationException(\"name not set\");"));
        assert!(source.contains("this._unsetProperties = builder._unsetProperties.clone();"));
    }

    #[test]
    fn primitive_setter_drops_null_check() {
        let user = person(vec![AccessorMethod::new("getAge", integer_type())]);
        let source = generate_default(&user);
        assert!(source.contains("public Person.Builder setAge(int age) {"));
        assert!(source.contains("this.age = age;"));
    }
}

mod scalar_properties {
    use super::*;

    #[test]
    fn nullable_property_passes_null_through() {
        let user = person(vec![AccessorMethod::nullable("getName", string_type())]);
        let source = generate_default(&user);
        assert!(source.contains("@Nullable private String name = null;"));
        assert!(source.contains("public Person.Builder setName(@Nullable String name) {"));
        assert!(!source.contains("checkNotNull"));
    }

    #[test]
    fn clear_resets_scalars_through_a_template() {
        let user = person(vec![AccessorMethod::new(
            "getAge",
            JavaType::Primitive(PrimitiveType::Int),
        )]);
        let source = generate_default(&user);
        assert!(source.contains("Person_Builder _template = new Person.Builder();"));
        assert!(source.contains("age = _template.age;"));
    }

    #[test]
    fn clear_without_factory_resets_to_zero_values() {
        let user = person(vec![
            AccessorMethod::new("getAge", JavaType::Primitive(PrimitiveType::Int)),
            AccessorMethod::nullable("getName", string_type()),
        ]);
        let config = GeneratorConfig {
            builder_factory: None,
            ..GeneratorConfig::default()
        };
        let source = generate(&user, &TypeUniverse::new(), &config).expect("generation failed");
        assert!(source.contains("age = 0;"));
        assert!(source.contains("name = null;"));
        assert!(!source.contains("_template"));
    }
}

mod optional_properties {
    use super::*;

    #[test]
    fn guava_flavor_uses_absent() {
        let user = person(vec![AccessorMethod::new(
            "getName",
            guava_optional_of(string_type()),
        )]);
        let source = generate_default(&user);
        assert!(source.contains("private Optional<String> name = Optional.absent();"));
        assert!(source.contains("this.name = Optional.absent();"));
        assert!(source.contains("import com.google.common.base.Optional;"));
    }

    #[test]
    fn java_util_flavor_uses_empty() {
        let user = person(vec![AccessorMethod::new(
            "getName",
            java_util_optional_of(string_type()),
        )]);
        let source = generate_default(&user);
        assert!(source.contains("private Optional<String> name = Optional.empty();"));
        assert!(source.contains("import java.util.Optional;"));
    }

    #[test]
    fn full_mutator_surface_is_generated() {
        let user = person(vec![AccessorMethod::new(
            "getName",
            java_util_optional_of(string_type()),
        )]);
        let source = generate_default(&user);
        assert!(source.contains("public Person.Builder setName(String name) {"));
        assert!(source.contains("public Person.Builder setName(Optional<? extends String> name) {"));
        assert!(source.contains("public Person.Builder setNullableName(@Nullable String name) {"));
        assert!(source.contains("public Person.Builder clearName() {"));
        assert!(source.contains("this.name = Optional.of(name);"));
    }

    #[test]
    fn merge_copies_only_present_values() {
        let user = person(vec![AccessorMethod::new(
            "getName",
            java_util_optional_of(string_type()),
        )]);
        let source = generate_default(&user);
        assert!(source.contains("if (value.getName().isPresent()) {"));
        assert!(source.contains("if (((Person_Builder) template).name.isPresent()) {"));
    }

    #[test]
    fn to_string_inlines_the_single_conditional() {
        let user = person(vec![AccessorMethod::new(
            "getName",
            java_util_optional_of(string_type()),
        )]);
        let source = generate_default(&user);
        assert!(source.contains(
            "return \"Person{\" + (name.isPresent() ? \"name=\" + name.get() : \"\") + \"}\";"
        ));
        assert!(!source.contains("COMMA_JOINER"));
    }

    #[test]
    fn to_string_joins_multiple_conditionals() {
        let user = person(vec![
            AccessorMethod::new("getName", java_util_optional_of(string_type())),
            AccessorMethod::new("getAge", JavaType::Primitive(PrimitiveType::Int)),
        ]);
        let source = generate_default(&user);
        assert!(source.contains(
            "private static final Joiner COMMA_JOINER = Joiner.on(\", \").skipNulls();"
        ));
        assert!(source.contains("name.isPresent() ? \"name=\" + name.get() : null,"));
        assert!(source.contains("\"age=\" + age)"));
    }
}

mod collection_properties {
    use super::*;

    #[test]
    fn list_mutators_delegate_to_the_single_add() {
        let user = person(vec![AccessorMethod::new("getTags", list_of(string_type()))]);
        let source = generate_default(&user);
        assert!(source
            .contains("private final ArrayList<String> tags = new ArrayList<>();"));
        assert!(source.contains("tags.add(Preconditions.checkNotNull(element));"));
        assert!(source.contains("public Person.Builder addTags(String... elements) {"));
        assert!(source.contains("public Person.Builder addAllTags(Iterable<? extends String> elements) {"));
        assert!(source.contains("return Collections.unmodifiableList(tags);"));
        assert!(source.contains("this.tags = ImmutableList.copyOf(builder.tags);"));
    }

    #[test]
    fn set_documents_silent_duplicate_discard() {
        let user = person(vec![AccessorMethod::new("getTags", set_of(string_type()))]);
        let source = generate_default(&user);
        assert!(source
            .contains("private final LinkedHashSet<String> tags = new LinkedHashSet<>();"));
        assert!(source.contains("has no effect (only the previously added element is retained)"));
        assert!(source.contains("return Collections.unmodifiableSet(tags);"));
        assert!(source.contains("this.tags = ImmutableSet.copyOf(builder.tags);"));
    }

    #[test]
    fn map_rejects_duplicate_keys() {
        let user = person(vec![AccessorMethod::new(
            "getCounts",
            map_of(string_type(), integer_type()),
        )]);
        let source = generate_default(&user);
        assert!(source.contains(
            "Preconditions.checkArgument(!counts.containsKey(key), \
             \"Key already present in counts: %s\", key);"
        ));
        assert!(source.contains(
            "Preconditions.checkArgument(counts.containsKey(key), \
             \"Key not present in counts: %s\", key);"
        ));
    }

    #[test]
    fn checked_varargs_needs_no_annotation() {
        let user = person(vec![AccessorMethod::new("getTags", list_of(string_type()))]);
        let source = generate_default(&user);
        assert!(!source.contains("@SafeVarargs"));
        assert!(!source.contains("@SuppressWarnings"));
    }

    #[test]
    fn unchecked_varargs_is_gated_by_source_level() {
        let mut user = person(vec![AccessorMethod::new(
            "getTags",
            list_of(JavaType::Variable("T".to_string())),
        )]);
        user.type_params = vec!["T".to_string()];
        let java7 = generate_at(&user, SourceLevel::Java7);
        assert!(java7.contains("@SafeVarargs"));
        assert!(java7.contains("public final Person.Builder<T> addTags(T... elements) {"));
        let java6 = generate_at(&user, SourceLevel::Java6);
        assert!(java6.contains("@SuppressWarnings(\"unchecked\")"));
        assert!(java6.contains("public Person.Builder<T> addTags(T... elements) {"));
    }

    #[test]
    fn clear_empties_collections_in_place() {
        let user = person(vec![AccessorMethod::new("getTags", list_of(string_type()))]);
        let source = generate_default(&user);
        assert!(source.contains("tags.clear();"));
        assert!(!source.contains("_template"));
    }
}

mod buildable_properties {
    use super::*;

    fn with_address(factory: BuilderFactory) -> (UserType, TypeUniverse) {
        let mut universe = TypeUniverse::new();
        let address = QualifiedName::top_level("com.example", "Address");
        universe.register_buildable(BuildableType {
            builder: address.nested("Builder"),
            target: address.clone(),
            factory,
        });
        let user = person(vec![AccessorMethod::new(
            "getAddress",
            JavaType::declared(address),
        )]);
        (user, universe)
    }

    #[test]
    fn holds_a_live_sub_builder() {
        let (user, universe) = with_address(BuilderFactory::NoArgsConstructor);
        let source = generate(&user, &universe, &GeneratorConfig::default())
            .expect("generation failed");
        assert!(source
            .contains("private final Address.Builder address = new Address.Builder();"));
        assert!(source.contains("public Address.Builder getAddressBuilder() {"));
        assert!(source.contains("this.address.clear();"));
        assert!(source.contains("this.address.mergeFrom(address);"));
    }

    #[test]
    fn static_method_factory_spells_the_field_differently() {
        let (user, universe) = with_address(BuilderFactory::StaticMethod);
        let source = generate(&user, &universe, &GeneratorConfig::default())
            .expect("generation failed");
        assert!(source.contains("private final Address.Builder address = Address.builder();"));
    }

    #[test]
    fn build_cascades_and_partial_cascades_partially() {
        let (user, universe) = with_address(BuilderFactory::NoArgsConstructor);
        let source = generate(&user, &universe, &GeneratorConfig::default())
            .expect("generation failed");
        assert!(source.contains("this.address = builder.address.build();"));
        assert!(source.contains("this.address = builder.address.buildPartial();"));
    }

    #[test]
    fn merges_delegate_into_the_sub_builder() {
        let (user, universe) = with_address(BuilderFactory::NoArgsConstructor);
        let source = generate(&user, &universe, &GeneratorConfig::default())
            .expect("generation failed");
        assert!(source.contains("address.mergeFrom(value.getAddress());"));
        assert!(source.contains("address.mergeFrom(((Person_Builder) template).address);"));
    }
}

mod standard_methods {
    use super::*;

    fn nullable_and_list() -> UserType {
        person(vec![
            AccessorMethod::nullable("getName", string_type()),
            AccessorMethod::new("getTags", list_of(string_type())),
        ])
    }

    #[test]
    fn java7_equals_chains_objects_equals() {
        let source = generate_at(&nullable_and_list(), SourceLevel::Java7);
        assert!(source.contains("return Objects.equals(name, other.name)"));
        assert!(source.contains("    && Objects.equals(tags, other.tags);"));
    }

    #[test]
    fn java6_equals_uses_per_property_guards() {
        let source = generate_at(&nullable_and_list(), SourceLevel::Java6);
        assert!(source.contains(
            "if (!(name == null ? other.name == null : name.equals(other.name))) {"
        ));
        assert!(source.contains("if (!tags.equals(other.tags)) {"));
        assert!(source.contains("return true;"));
    }

    #[test]
    fn hash_code_follows_the_source_level() {
        let java7 = generate_at(&nullable_and_list(), SourceLevel::Java7);
        assert!(java7.contains("return Objects.hash(name, tags);"));
        let java6 = generate_at(&nullable_and_list(), SourceLevel::Java6);
        assert!(java6.contains("return Arrays.hashCode(new Object[] {name, tags});"));
    }

    #[test]
    fn partial_folds_unset_properties_into_identity() {
        let user = person(vec![AccessorMethod::new("getName", string_type())]);
        let source = generate_default(&user);
        assert!(source.contains("return Objects.hash(name, _unsetProperties);"));
        assert!(source.contains("&& Objects.equals(_unsetProperties, other._unsetProperties);"));
    }

    #[test]
    fn partial_to_string_marks_unset_properties() {
        let user = person(vec![
            AccessorMethod::new("getName", string_type()),
            AccessorMethod::new("getEmail", string_type()),
        ]);
        let source = generate_default(&user);
        assert!(source.contains("return \"partial Person{\""));
        assert!(source.contains(
            "!_unsetProperties.contains(Person_Builder.Property.NAME) ? \"name=\" + name : null,"
        ));
    }

    #[test]
    fn underridden_methods_are_not_generated() {
        let mut user = nullable_and_list();
        user.underrides.insert(StandardMethod::Equals);
        user.underrides.insert(StandardMethod::HashCode);
        user.underrides.insert(StandardMethod::ToString);
        let source = generate_default(&user);
        assert!(!source.contains("public boolean equals(Object obj) {"));
        assert!(!source.contains("public int hashCode() {"));
        assert!(!source.contains("public String toString() {"));
    }
}

mod builder_surface {
    use super::*;

    #[test]
    fn to_builder_round_trips_values_and_rejects_partials() {
        let mut user = person(vec![AccessorMethod::new("getName", string_type())]);
        user.declares_to_builder = true;
        let source = generate_default(&user);
        assert!(source.contains("return new Person.Builder().mergeFrom(this);"));
        assert!(source.contains("throw new UnsupportedOperationException();"));
    }

    #[test]
    fn static_method_factory_changes_every_fresh_builder() {
        let mut user = person(vec![AccessorMethod::new("getName", string_type())]);
        user.declares_to_builder = true;
        let config = GeneratorConfig {
            builder_factory: Some(BuilderFactory::StaticMethod),
            ..GeneratorConfig::default()
        };
        let source = generate(&user, &TypeUniverse::new(), &config).expect("generation failed");
        assert!(source.contains("return Person.builder().mergeFrom(this);"));
        assert!(source.contains("Person_Builder _template = Person.builder();"));
    }

    #[test]
    fn gwt_annotations_are_opt_in() {
        let user = person(vec![AccessorMethod::new("getName", string_type())]);
        let plain = generate_default(&user);
        assert!(!plain.contains("@GwtCompatible"));
        let config = GeneratorConfig {
            gwt_compatible: true,
            ..GeneratorConfig::default()
        };
        let compatible =
            generate(&user, &TypeUniverse::new(), &config).expect("generation failed");
        assert!(compatible.contains("@GwtCompatible\n"));
        let config = GeneratorConfig {
            gwt_compatible: true,
            gwt_serializable: true,
            ..GeneratorConfig::default()
        };
        let serializable =
            generate(&user, &TypeUniverse::new(), &config).expect("generation failed");
        assert!(serializable.contains("@GwtCompatible(serializable = true)"));
    }

    #[test]
    fn interface_types_implement_instead_of_extend() {
        let mut user = person(vec![AccessorMethod::new("getName", string_type())]);
        user.interface = true;
        let source = generate_default(&user);
        assert!(source.contains("private static final class Value implements Person {"));
    }

    #[test]
    fn generic_targets_carry_their_parameters() {
        let mut user = person(vec![AccessorMethod::new(
            "getId",
            JavaType::Variable("T".to_string()),
        )]);
        user.type_params = vec!["T".to_string()];
        let source = generate_default(&user);
        assert!(source.contains("abstract class Person_Builder<T> {"));
        assert!(source.contains("if (!(obj instanceof Person_Builder.Value)) {"));
        assert!(source
            .contains("Person_Builder.Value<?> other = (Person_Builder.Value<?>) obj;"));
        assert!(source.contains("return new Person_Builder.Value<>(this);"));
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: GeneratorConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn unit_carries_package_and_sorted_imports() {
        let user = person(vec![AccessorMethod::new("getTags", list_of(string_type()))]);
        let source = generate_default(&user);
        assert!(source.starts_with("package com.example;\n"));
        let preconditions = source
            .find("import com.google.common.base.Preconditions;")
            .expect("missing Preconditions import");
        let collections = source
            .find("import java.util.Collections;")
            .expect("missing Collections import");
        assert!(preconditions < collections);
    }
}
