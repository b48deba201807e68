use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, HashSet};
use tablemap::{Entity, ValueType};
use tests::{columns, tests, MappingTest};
use uuid::Uuid;

#[derive(Default, Entity)]
struct Address {
    street: String,
    zip_code: String,
}

fn entity_as_column_type(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Customer {
        #[partition_key]
        id: Uuid,

        home: Address,

        previous: Vec<String>,
    }

    let mapping = test.table::<Customer>();
    let home = mapping.property("home").unwrap();

    assert_eq!(home.ty(), &ValueType::custom(<Address as Entity>::TYPE_KEY));
    assert_eq!(mapping.column_for_property("home"), Some("home"));

    let address = test.mappings().descriptor::<Address>().unwrap();
    assert_eq!(address.schema_name(), "address");
    assert_eq!(
        columns(address.stored_columns().map(|(column, _)| column)),
        ["street", "zip_code"]
    );
}

fn collection_types(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Playlist {
        #[partition_key]
        owner: Uuid,

        #[clustering_key]
        title: String,

        tags: HashSet<String>,

        plays: BTreeMap<String, i64>,

        cover: Option<Vec<u8>>,

        is_public: bool,
    }

    let mapping = test.table::<Playlist>();
    let ty = |property: &str| mapping.property(property).unwrap().ty().clone();

    assert_eq!(ty("tags"), ValueType::set(ValueType::Text));
    assert_eq!(ty("plays"), ValueType::map(ValueType::Text, ValueType::I64));
    assert_eq!(ty("cover"), ValueType::optional(ValueType::Blob));
    assert_eq!(ty("is_public"), ValueType::Bool);
    assert_eq!(columns(mapping.clustering_key_columns()), ["title"]);
}

tests!(entity_as_column_type, collection_types);
