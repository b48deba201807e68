use pretty_assertions::assert_eq;
use tablemap::{Entity, NameConverter, NamingConvention, Resolver};
use tests::{columns, tests, MappingTest};

#[derive(Default)]
struct Prefixed;

impl NameConverter for Prefixed {
    fn convert(&self, name: &str) -> String {
        format!("c_{name}")
    }
}

fn type_naming_convention(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    #[naming(UpperSnakeCase)]
    struct UserProfile {
        #[partition_key]
        user_id: i64,

        display_name: String,
    }

    let mapping = test.table::<UserProfile>();

    assert_eq!(mapping.schema_name(), "USER_PROFILE");
    assert_eq!(columns(mapping.partition_key_columns()), ["USER_ID"]);
    assert_eq!(mapping.column_for_property("display_name"), Some("DISPLAY_NAME"));
}

fn explicit_table_name(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    #[table = "profiles_v2"]
    #[naming(LowerCamelCase)]
    struct UserProfile {
        #[partition_key]
        user_id: i64,
    }

    let mapping = test.table::<UserProfile>();

    assert_eq!(mapping.schema_name(), "profiles_v2");
    assert_eq!(columns(mapping.partition_key_columns()), ["userId"]);
}

fn converter_applies_to_properties_only(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    #[naming(UpperCase)]
    #[converter(Prefixed)]
    struct Metric {
        #[partition_key]
        name: String,

        #[column("val")]
        value: f64,
    }

    let mapping = test.table::<Metric>();

    assert_eq!(mapping.schema_name(), "METRIC");
    assert_eq!(columns(mapping.partition_key_columns()), ["c_name"]);
    assert_eq!(mapping.column_for_property("value"), Some("val"));
}

fn every_convention(_test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Product {
        #[partition_key]
        product_id: i64,
    }

    let expected = [
        (NamingConvention::ExactCase, "Product", "product_id"),
        (NamingConvention::CaseInsensitive, "product", "product_id"),
        (NamingConvention::LowerCamelCase, "product", "productId"),
        (NamingConvention::UpperCamelCase, "Product", "ProductId"),
        (NamingConvention::SnakeCaseInsensitive, "product", "product_id"),
        (NamingConvention::UpperSnakeCase, "PRODUCT", "PRODUCT_ID"),
        (NamingConvention::LowerCase, "product", "productid"),
        (NamingConvention::UpperCase, "PRODUCT", "PRODUCTID"),
    ];

    for (convention, table, column) in expected {
        let resolver = Resolver::builder().default_convention(convention).build();

        let mapping = resolver.resolve(&Product::describe()).unwrap();

        assert_eq!(mapping.schema_name(), table, "{convention:?}");
        assert_eq!(
            columns(mapping.partition_key_columns()),
            [column],
            "{convention:?}"
        );
    }
}

fn type_convention_beats_resolver_default(_test: &mut MappingTest) {
    #[derive(Default, Entity)]
    #[naming(LowerCase)]
    struct OrderLine {
        #[partition_key]
        order_id: i64,
    }

    let test = MappingTest::with_resolver(
        Resolver::builder()
            .default_convention(NamingConvention::UpperCamelCase)
            .build(),
    );
    let mapping = test.table::<OrderLine>();

    assert_eq!(mapping.schema_name(), "orderline");
    assert_eq!(columns(mapping.partition_key_columns()), ["orderid"]);
}

tests!(
    type_naming_convention,
    explicit_table_name,
    converter_applies_to_properties_only,
    every_convention,
    type_convention_beats_resolver_default,
);
