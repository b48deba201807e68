use std::sync::Arc;
use tablemap::{Entity, Mappings};
use uuid::Uuid;

#[derive(Default, Entity)]
struct Shipment {
    #[partition_key]
    id: Uuid,

    #[clustering_key]
    leg: i32,

    carrier: String,
}

#[derive(Default, Entity)]
struct Broken {
    #[partition_key]
    a: i32,

    #[partition_key]
    b: i32,
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_readers_and_writers_share_one_descriptor() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mappings = Arc::new(Mappings::new());

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let mappings = mappings.clone();
            tokio::spawn(async move { mappings.table::<Shipment>() })
        })
        .collect();

    let mut descriptors = Vec::new();

    for task in tasks {
        descriptors.push(task.await.unwrap().unwrap());
    }

    let first = &descriptors[0];
    assert!(descriptors.iter().all(|d| Arc::ptr_eq(first, d)));
    assert_eq!(mappings.cache().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_failures_agree() {
    let mappings = Arc::new(Mappings::new());

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let mappings = mappings.clone();
            tokio::task::spawn_blocking(move || mappings.descriptor::<Broken>().map(|_| ()))
        })
        .collect();

    let mut messages = Vec::new();

    for task in tasks {
        messages.push(task.await.unwrap().unwrap_err().to_string());
    }

    messages.dedup();
    assert_eq!(messages.len(), 1);
    assert!(mappings.get::<Broken>().is_none());
}

#[tokio::test]
async fn invalidate_resolves_again() {
    let mappings = Mappings::new();

    let before = mappings.table::<Shipment>().unwrap();
    assert!(mappings.invalidate::<Shipment>());
    assert!(!mappings.invalidate::<Shipment>());

    let after = mappings.table::<Shipment>().unwrap();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}
