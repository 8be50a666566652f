//! Tests for tokio spawner utilities

use race_timeout::core::{RaceError, Spawn};
use race_timeout::runtime::tokio_spawner::TokioSpawner;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[tokio::test]
async fn test_tokio_spawner_current_inside_runtime() {
    let spawner = TokioSpawner::current().expect("inside a runtime");

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send("spawned").unwrap();
    });
    assert_eq!(rx.await.unwrap(), "spawned");
}

#[test]
fn test_tokio_spawner_current_outside_runtime() {
    let err = TokioSpawner::current().unwrap_err();
    assert!(matches!(err, RaceError::RuntimeUnavailable(_)));
}

#[test]
fn test_tokio_spawner_with_owned_runtime() {
    let spawner = TokioSpawner::with_worker_threads(1).expect("runtime");

    let (tx, rx) = std::sync::mpsc::channel();
    spawner.spawn(async move {
        tx.send(7).unwrap();
    });
    assert_eq!(rx.recv_timeout(std::time::Duration::from_secs(2)).unwrap(), 7);
}

#[test]
fn test_tokio_spawner_rejects_zero_worker_threads() {
    let err = TokioSpawner::with_worker_threads(0).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}

#[tokio::test]
async fn test_owned_runtime_dropped_inside_async_context() {
    let spawner = TokioSpawner::with_worker_threads(1).expect("runtime");
    let clone = spawner.clone();

    let (tx, rx) = tokio::sync::oneshot::channel();
    clone.spawn(async move {
        tx.send(9).unwrap();
    });
    assert_eq!(rx.await.unwrap(), 9);

    drop(clone);
    drop(spawner);
}
