use tablemap::{ConfigurationRule, Entity, NameConverter, StructuralRule};
use tests::{tests, MappingTest};
use uuid::Uuid;

#[derive(Default)]
struct Blank;

impl NameConverter for Blank {
    fn convert(&self, _name: &str) -> String {
        String::new()
    }
}

fn column_name_collision(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Customer {
        #[partition_key]
        id: Uuid,

        #[column("name")]
        full_name: String,

        name: String,
    }

    let err = test.table_err::<Customer>();

    assert!(err.is_configuration());
    assert_eq!(
        err.configuration_rule(),
        Some(ConfigurationRule::NameCollision)
    );

    let message = err.to_string();
    assert!(message.contains("full_name"), "{message}");
    assert!(message.contains("`name`"), "{message}");
}

fn computed_column_collides(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Reading {
        #[partition_key]
        id: Uuid,

        written: i64,

        #[computed("writetime(v)")]
        #[column("written")]
        write_time: i64,
    }

    let err = test.table_err::<Reading>();
    assert_eq!(
        err.configuration_rule(),
        Some(ConfigurationRule::NameCollision)
    );
}

fn duplicate_partition_key_position(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Event {
        #[partition_key]
        tenant: Uuid,

        #[partition_key]
        day: i32,
    }

    let err = test.table_err::<Event>();

    assert!(err.is_structural());
    assert_eq!(
        err.structural_rule(),
        Some(StructuralRule::DuplicateKeyPosition)
    );
    assert_eq!(err.property(), Some("day"));
}

fn duplicate_clustering_key_position(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Event {
        #[partition_key]
        tenant: Uuid,

        #[clustering_key(1)]
        hour: i32,

        #[clustering_key(1)]
        minute: i32,
    }

    let err = test.table_err::<Event>();
    assert_eq!(
        err.structural_rule(),
        Some(StructuralRule::DuplicateKeyPosition)
    );
}

fn table_needs_partition_key(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Address {
        street: String,
        city: String,
    }

    let err = test.table_err::<Address>();
    assert_eq!(
        err.structural_rule(),
        Some(StructuralRule::MissingPartitionKey)
    );

    // Still usable as an embedded value.
    let mapping = test.mappings().descriptor::<Address>().unwrap();
    assert_eq!(mapping.stored_columns().len(), 2);
}

fn empty_converted_name(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    #[converter(Blank)]
    struct Note {
        #[partition_key]
        id: Uuid,
    }

    let err = test.table_err::<Note>();
    assert_eq!(err.configuration_rule(), Some(ConfigurationRule::EmptyName));
    assert_eq!(err.property(), Some("id"));
}

fn failures_are_cached(test: &mut MappingTest) {
    #[derive(Default, Entity)]
    struct Event {
        #[partition_key]
        a: i32,

        #[partition_key]
        b: i32,
    }

    let first = test.mappings().descriptor::<Event>().unwrap_err();
    let second = test.mappings().descriptor::<Event>().unwrap_err();

    assert_eq!(first.to_string(), second.to_string());
    assert!(test.mappings().get::<Event>().is_none());
    assert!(test.mappings().invalidate::<Event>());
}

tests!(
    column_name_collision,
    computed_column_collides,
    duplicate_partition_key_position,
    duplicate_clustering_key_position,
    table_needs_partition_key,
    empty_converted_name,
    failures_are_cached,
);
