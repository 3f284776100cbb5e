//! End-to-end tests against a stub counter
//!
//! Each scenario serves a canned counter body from an in-process listener,
//! drives a real fetch cycle through `CounterClient`, and checks the
//! snapshot and the rendered feed. Route-level assertions go through
//! `axum-test`.

#[cfg(test)]
mod tests {
    use axum::{routing::get, Router};
    use axum_test::TestServer;
    use chrono::Utc;

    use crate::app;
    use crate::config::Config;
    use crate::counter::{refresh_once, CounterClient};
    use crate::state::{AppState, FundraisingSnapshot};

    /// Serve a fixed body on an ephemeral port and return the counter URL.
    async fn spawn_upstream(body: &'static str) -> String {
        let stub = Router::new().route("/counter", get(move || async move { body }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });

        format!("http://{}/counter", addr)
    }

    /// A URL nothing is listening on.
    fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        format!("http://{}/counter", addr)
    }

    fn test_config(counter_url: String, adjustment: i64) -> Config {
        Config {
            goal: 100_000,
            adjustment,
            counter_url,
        }
    }

    #[tokio::test]
    async fn full_cycle_updates_snapshot_and_feed() {
        let url = spawn_upstream("var iraiser_counter = {RE2025_nb:150,RE2025_value:12000}").await;
        let state = AppState::new(test_config(url, 0));
        let client = CounterClient::new(state.config.counter_url.clone());

        refresh_once(&client, &state).await;

        let snapshot = state.snapshot.read().await.clone();
        assert_eq!(snapshot.collected, 12000);
        assert_eq!(snapshot.donations, 150);
        assert!((snapshot.percent - 12.0).abs() < f64::EPSILON);

        let server = TestServer::new(app(state)).unwrap();
        let response = server.get("/rss").await;
        response.assert_status_ok();
        assert_eq!(
            response.header("content-type"),
            "application/rss+xml; charset=utf-8"
        );
        assert!(response
            .text()
            .contains("12000€ collectés, 150 dons (12.00% de l'objectif)"));
    }

    #[tokio::test]
    async fn unreachable_upstream_leaves_snapshot_untouched() {
        let state = AppState::new(test_config(unreachable_url(), 0));
        let client = CounterClient::new(state.config.counter_url.clone());

        refresh_once(&client, &state).await;

        let snapshot = state.snapshot.read().await.clone();
        assert_eq!(snapshot, FundraisingSnapshot::default());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previously_applied_totals() {
        let url = spawn_upstream("var iraiser_counter = {RE2025_nb:150,RE2025_value:12000}").await;
        let state = AppState::new(test_config(url, 0));
        let client = CounterClient::new(state.config.counter_url.clone());
        refresh_once(&client, &state).await;
        let before = state.snapshot.read().await.clone();

        let dead_client = CounterClient::new(unreachable_url());
        refresh_once(&dead_client, &state).await;

        let after = state.snapshot.read().await.clone();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn malformed_payload_leaves_snapshot_untouched() {
        let url = spawn_upstream("var iraiser_counter = {RE2025_nb:").await;
        let state = AppState::new(test_config(url, 0));
        let client = CounterClient::new(state.config.counter_url.clone());

        refresh_once(&client, &state).await;

        let snapshot = state.snapshot.read().await.clone();
        assert_eq!(snapshot, FundraisingSnapshot::default());
    }

    #[tokio::test]
    async fn manual_adjustment_is_added_to_reported_value() {
        let url = spawn_upstream("var iraiser_counter = {RE2025_nb:150,RE2025_value:12000}").await;
        let state = AppState::new(test_config(url, 500));
        let client = CounterClient::new(state.config.counter_url.clone());

        refresh_once(&client, &state).await;

        let snapshot = state.snapshot.read().await.clone();
        assert_eq!(snapshot.collected, 12500);
        assert!((snapshot.percent - 12.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn feed_renders_before_first_fetch() {
        let state = AppState::new(test_config("http://localhost:1/counter".to_string(), 0));

        let server = TestServer::new(app(state)).unwrap();
        let response = server.get("/rss").await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("0€ collectés, 0 dons (0.00% de l'objectif)"));
        assert!(body.contains("<guid>iraiser-2025-19700101000000</guid>"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let state = AppState::new(test_config("http://localhost:1/counter".to_string(), 0));

        let server = TestServer::new(app(state)).unwrap();
        let response = server.get("/health").await;

        response.assert_status_ok();
        assert!(response.text().contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn concurrent_readers_never_observe_torn_snapshots() {
        let state = AppState::new(test_config("http://localhost:1/counter".to_string(), 0));

        // Writer keeps the fields correlated within each write guard.
        let writer_state = state.clone();
        let writer = tokio::spawn(async move {
            for i in 1..=500i64 {
                let mut snapshot = writer_state.snapshot.write().await;
                snapshot.collected = i * 100;
                snapshot.donations = i;
                snapshot.percent = (i * 100) as f64 / 100_000.0 * 100.0;
                snapshot.last_updated = Utc::now();
            }
        });

        let readers: Vec<_> = (0..8)
            .map(|_| {
                let reader_state = state.clone();
                tokio::spawn(async move {
                    for _ in 0..500 {
                        let snapshot = reader_state.snapshot.read().await.clone();
                        assert_eq!(snapshot.collected, snapshot.donations * 100);
                    }
                })
            })
            .collect();

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
    }
}
