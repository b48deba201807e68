use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::sync::Arc;
use tablemap::{Entity, MappingDescriptor, Mappings, Role};
use tests::{assert_unique, columns, tests, MappingTest};
use uuid::Uuid;

fn snake_case_by_default(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct ProductCatalog {
        #[partition_key]
        product_id: Uuid,

        description: String,
    }

    let mapping = test.table::<ProductCatalog>();

    assert_eq!(mapping.type_name(), "ProductCatalog");
    assert_eq!(mapping.schema_name(), "product_catalog");
    assert_eq!(columns(mapping.partition_key_columns()), ["product_id"]);
    assert_eq!(columns(mapping.clustering_key_columns()), Vec::<&str>::new());
    assert_eq!(
        mapping.column_for_property("description"),
        Some("description")
    );
    assert!(mapping.warnings().is_empty());
}

fn explicit_column_name(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Product {
        #[partition_key]
        #[column("id")]
        product_id: Uuid,

        description: String,
    }

    let mapping = test.table::<Product>();

    assert_eq!(columns(mapping.partition_key_columns()), ["id"]);
    assert_eq!(mapping.property_for_column("id").unwrap().property_name(), "product_id");

    let stored: Vec<_> = mapping.stored_columns().map(|(column, _)| column).collect();
    assert_eq!(stored, ["description"]);
}

fn composite_partition_key(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct PhoneNumber {
        #[partition_key(2)]
        area_code: i32,

        #[partition_key(1)]
        country_code: i32,

        #[clustering_key(0)]
        number: String,
    }

    let mapping = test.table::<PhoneNumber>();

    assert_eq!(
        columns(mapping.partition_key_columns()),
        ["country_code", "area_code"]
    );
    assert_eq!(columns(mapping.clustering_key_columns()), ["number"]);
}

fn computed_column(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Reading {
        #[partition_key]
        sensor: Uuid,

        value: f64,

        #[computed("writetime(v)")]
        #[column("ts")]
        writetime: i64,
    }

    let mapping = test.table::<Reading>();
    let computed: Vec<_> = mapping.computed_columns().collect();

    assert_eq!(computed, [("ts", "writetime(v)")]);
    assert!(mapping
        .stored_columns()
        .all(|(column, _)| column != "ts"));
    assert!(!mapping.is_writable("writetime"));

    let writes: Vec<_> = mapping
        .write_columns()
        .map(|property| property.property_name())
        .collect();
    assert_eq!(writes, ["sensor", "value"]);
}

fn excluded_by_name(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    #[exclude("not_a_column")]
    struct Account {
        #[partition_key]
        id: Uuid,

        not_a_column: String,
    }

    let mapping = test.table::<Account>();
    let property = mapping.property("not_a_column").unwrap();

    assert_eq!(property.role(), &Role::Excluded);
    assert_eq!(property.schema_name(), None);
    assert_eq!(mapping.column_for_property("not_a_column"), None);
    assert!(mapping
        .stored_columns()
        .all(|(_, p)| p.property_name() != "not_a_column"));
    assert_eq!(mapping.computed_columns().len(), 0);
}

fn excluded_and_transient_fields(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Session {
        #[partition_key]
        id: Uuid,

        #[exclude]
        cached_owner: String,

        #[transient]
        dirty: bool,

        expires: std::time::SystemTime,
    }

    let mapping = test.table::<Session>();

    assert!(mapping.property("cached_owner").unwrap().role().is_excluded());
    assert!(mapping.property("dirty").unwrap().role().is_excluded());

    let stored: Vec<_> = mapping.stored_columns().map(|(column, _)| column).collect();
    assert_eq!(stored, ["expires"]);
}

fn properties_keep_declaration_order(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Order {
        #[clustering_key(0)]
        placed: i64,

        total: f64,

        #[partition_key]
        customer: Uuid,

        #[column("kind")]
        r#type: String,
    }

    let mapping = test.table::<Order>();
    let names: Vec<_> = mapping.property_names().collect();

    assert_eq!(names, ["placed", "total", "customer", "type"]);
    assert_unique!(columns(mapping.write_columns().filter_map(|p| p.schema_name())));
    assert_eq!(mapping.column_for_property("type"), Some("kind"));

    let writes: Vec<_> = mapping
        .write_columns()
        .filter_map(|property| property.schema_name())
        .collect();
    assert_eq!(writes, ["customer", "placed", "total", "kind"]);
}

fn descriptor_is_shared(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Product {
        #[partition_key]
        id: Uuid,
    }

    let first = test.table::<Product>();
    let second = test.mappings().descriptor::<Product>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.type_key(), <Product as Entity>::TYPE_KEY);
    assert!(first.type_key().ends_with("::Product"));
}

fn unmapped_fields_of_any_type(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    #[exclude("owner")]
    struct Session {
        #[partition_key]
        id: Uuid,

        #[transient]
        hits: Cell<u32>,

        #[exclude]
        history: Vec<Vec<String>>,

        owner: Option<Arc<str>>,

        started: i64,
    }

    let mapping = test.table::<Session>();

    for property in ["hits", "history", "owner"] {
        assert!(mapping.property(property).unwrap().role().is_excluded(), "{property}");
        assert_eq!(mapping.column_for_property(property), None);
    }

    let stored: Vec<_> = mapping.stored_columns().map(|(column, _)| column).collect();
    assert_eq!(stored, ["started"]);
}

/// Declares `Product` in a function of its own so that two unrelated types
/// share a name and a module.
fn catalog_product(mappings: &Mappings) -> Arc<MappingDescriptor> {
    #[derive(Default, Entity)]
    struct Product {
        #[partition_key]
        id: Uuid,

        description: String,
    }

    mappings.table::<Product>().unwrap()
}

fn inventory_product(mappings: &Mappings) -> Arc<MappingDescriptor> {
    #[derive(Default, Entity)]
    struct Product {
        #[partition_key]
        sku: String,

        price: f64,
    }

    mappings.table::<Product>().unwrap()
}

fn same_named_types_are_distinct(test: &mut MappingTest) {
    let catalog = catalog_product(test.mappings());
    let inventory = inventory_product(test.mappings());

    assert_eq!(catalog.type_key(), inventory.type_key());
    assert_eq!(catalog.property_names().collect::<Vec<_>>(), ["id", "description"]);
    assert_eq!(inventory.property_names().collect::<Vec<_>>(), ["sku", "price"]);
    assert!(!Arc::ptr_eq(&catalog, &inventory));
    assert_eq!(test.mappings().cache().len(), 2);

    // Both stay cached under their own entry.
    assert!(Arc::ptr_eq(&catalog, &catalog_product(test.mappings())));
    assert!(Arc::ptr_eq(&inventory, &inventory_product(test.mappings())));
}

tests!(
    snake_case_by_default,
    explicit_column_name,
    composite_partition_key,
    computed_column,
    excluded_by_name,
    excluded_and_transient_fields,
    properties_keep_declaration_order,
    descriptor_is_shared,
    unmapped_fields_of_any_type,
    same_named_types_are_distinct,
);
