//! Idle deadline: only inbound activity keeps a session alive.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use chatrelay_gateway::transport::idle::IdleTimer;

const IDLE: Duration = Duration::from_secs(10);

// Timer deadlines round up to the next millisecond.
fn assert_near(elapsed: Duration, expected: Duration) {
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(5),
        "elapsed {elapsed:?}, expected {expected:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn fires_after_timeout_without_inbound() {
    let start = Instant::now();
    let mut idle = IdleTimer::new(IDLE);
    idle.expired().await;
    assert_near(start.elapsed(), IDLE);
}

#[tokio::test(start_paused = true)]
async fn busy_outbound_does_not_starve_the_deadline() {
    let (tx, mut rx) = mpsc::channel::<u32>(8);
    tokio::spawn(async move {
        for i in 0.. {
            if tx.send(i).await.is_err() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let start = Instant::now();
    let mut idle = IdleTimer::new(IDLE);
    let mut forwarded = 0u32;
    loop {
        tokio::select! {
            Some(_) = rx.recv() => forwarded += 1,
            _ = idle.expired() => break,
        }
    }
    assert_near(start.elapsed(), IDLE);
    assert!(forwarded >= 90, "forwarded {forwarded}");
}

#[tokio::test(start_paused = true)]
async fn touch_pushes_the_deadline_forward() {
    let start = Instant::now();
    let mut idle = IdleTimer::new(IDLE);

    tokio::time::sleep(Duration::from_secs(7)).await;
    idle.touch();

    idle.expired().await;
    assert_near(start.elapsed(), Duration::from_secs(17));
}
