//! Tests for racer builders

use std::future::Future;

use race_timeout::builders::build_race_timeout;
use race_timeout::config::{AbandonPolicy, RaceConfig};
use race_timeout::core::{RaceError, Spawn};

#[derive(Clone)]
struct InlineSpawner;

impl Spawn for InlineSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(fut);
    }
}

#[test]
fn test_build_race_timeout_from_config() {
    let cfg = RaceConfig {
        default_deadline_ms: 750,
        abandon: AbandonPolicy::Detach,
    };

    let racer = build_race_timeout(&cfg, InlineSpawner).unwrap();
    assert_eq!(racer.deadline().as_millis(), 750);
    assert_eq!(racer.abandon_policy(), AbandonPolicy::Detach);
}

#[test]
fn test_build_race_timeout_rejects_invalid_config() {
    let cfg = RaceConfig {
        default_deadline_ms: 0,
        abandon: AbandonPolicy::Drop,
    };

    match build_race_timeout(&cfg, InlineSpawner) {
        Err(RaceError::InvalidConfig(msg)) => assert!(msg.contains("default_deadline_ms")),
        other => panic!("expected invalid config, got {:?}", other.map(|r| r.deadline())),
    }
}
