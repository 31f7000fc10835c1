//! Integration tests for the Redis-backed OTP store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p vp_infra --test redis_integration -- --ignored

use std::time::Duration;

use vp_core::services::otp::OtpStore;
use vp_infra::cache::RedisClient;
use vp_shared::config::CacheConfig;

async fn connect() -> RedisClient {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    RedisClient::new(&url, &CacheConfig::default())
        .await
        .expect("failed to connect to Redis")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn connection_and_ping() {
    let client = connect().await;
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn put_get_delete_round_trip() {
    let client = connect().await;
    let key = "test:otp:5551234567";

    client
        .put(key, "123456", Duration::from_secs(300))
        .await
        .unwrap();
    assert_eq!(client.get(key).await.unwrap().as_deref(), Some("123456"));

    assert!(client.remove(key).await.unwrap());
    assert!(client.get(key).await.unwrap().is_none());
    assert!(!client.remove(key).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn entries_expire() {
    let client = connect().await;
    let key = "test:otp:expiry";

    client.put(key, "123456", Duration::from_secs(1)).await.unwrap();
    assert!(client.get(key).await.unwrap().is_some());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(client.get(key).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn take_if_match_is_single_use() {
    let client = connect().await;
    let key = "test:otp:single-use";

    client
        .put(key, "123456", Duration::from_secs(300))
        .await
        .unwrap();

    // Wrong value leaves the entry in place
    assert!(!client.take_if_match(key, "654321").await.unwrap());
    assert!(client.get(key).await.unwrap().is_some());

    // Correct value consumes it exactly once
    assert!(client.take_if_match(key, "123456").await.unwrap());
    assert!(!client.take_if_match(key, "123456").await.unwrap());
    assert!(client.get(key).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn racing_takes_yield_one_winner() {
    let client = connect().await;
    let key = "test:otp:race";

    for _ in 0..20 {
        client
            .put(key, "123456", Duration::from_secs(300))
            .await
            .unwrap();

        let a = {
            let client = client.clone();
            tokio::spawn(async move { client.take_if_match("test:otp:race", "123456").await })
        };
        let b = {
            let client = client.clone();
            tokio::spawn(async move { client.take_if_match("test:otp:race", "123456").await })
        };

        let (a, b) = tokio::join!(a, b);
        let wins = [a.unwrap().unwrap(), b.unwrap().unwrap()]
            .iter()
            .filter(|&&won| won)
            .count();
        assert_eq!(wins, 1);
    }
}
