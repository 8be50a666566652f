//! Tests for the cancellation signal

use std::time::Duration;

use race_timeout::core::CancellationSource;

#[test]
fn test_signals_share_state_with_source() {
    let source = CancellationSource::new();
    let a = source.signal();
    let b = a.clone();

    assert!(!a.is_cancelled());
    source.cancel();
    assert!(a.is_cancelled());
    assert!(b.aborted());
}

#[test]
fn test_signal_outlives_source() {
    let source = CancellationSource::new();
    let signal = source.signal();
    source.cancel();
    drop(source);
    assert!(signal.is_cancelled());
}

#[test]
fn test_debug_shows_flag() {
    let source = CancellationSource::new();
    assert_eq!(format!("{:?}", source.signal()), "CancellationSignal { aborted: false }");
    source.cancel();
    assert_eq!(format!("{:?}", source), "CancellationSource { aborted: true }");
}

#[tokio::test]
async fn test_many_waiters_all_wake() {
    let source = CancellationSource::new();
    let waiters: Vec<_> = (0..8)
        .map(|_| {
            let signal = source.signal();
            tokio::spawn(async move { signal.cancelled().await })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(10)).await;
    source.cancel();

    let joined = tokio::time::timeout(Duration::from_secs(2), futures::future::join_all(waiters))
        .await
        .expect("all waiters woke");
    assert!(joined.iter().all(Result::is_ok));
}
