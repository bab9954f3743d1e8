//! Batched per-player stats queries.
//!
//! The platform caps how many players one stats query may name, so the
//! requester partitions the roster's key list into contiguous groups and
//! issues one query per group, all concurrently. The collected documents
//! keep submission order so downstream merging can rely on positional
//! correspondence with the key partition.

use crate::auth::Credential;
use crate::constants::batch::PLAYERS_PER_REQUEST;
use crate::error::AppError;
use crate::fetcher::models::PlayerKey;
use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::client::FantasyApi;
use super::urls::stats_resource;

/// Partitions keys into contiguous, order-preserving groups of at most
/// `batch_size` entries.
pub fn split_into_batches(keys: &[PlayerKey], batch_size: usize) -> Vec<&[PlayerKey]> {
    keys.chunks(batch_size).collect()
}

/// Issues one stats query per batch of player keys, all concurrently, and
/// collects the raw documents in submission order.
///
/// No batch is retried; the first failing query fails the whole call.
#[instrument(skip(client, credential, player_keys), fields(players = player_keys.len()))]
pub async fn fetch_player_stats_batched<C>(
    client: &C,
    credential: &Credential,
    player_keys: &[PlayerKey],
) -> Result<Vec<Value>, AppError>
where
    C: FantasyApi + Sync,
{
    if player_keys.is_empty() {
        debug!("Roster has no players, skipping stats queries");
        return Ok(Vec::new());
    }

    let batches = split_into_batches(player_keys, PLAYERS_PER_REQUEST);
    info!(
        "Fetching stats for {} players in {} batch(es)",
        player_keys.len(),
        batches.len()
    );

    // try_join_all keeps results in submission order regardless of the
    // order responses arrive in
    let requests = batches.iter().map(|batch| {
        let resource = stats_resource(batch);
        async move { client.query(&resource, credential).await }
    });
    try_join_all(requests).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;

    fn keys(n: usize) -> Vec<PlayerKey> {
        (0..n).map(|i| format!("nhl.p.{i:03}")).collect()
    }

    fn test_credential() -> Credential {
        Credential {
            access_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            id_token: "a.b.c".to_string(),
            expires_at: i64::MAX,
        }
    }

    /// Test double that records queried paths and answers each query after a
    /// delay that shrinks with submission order, so later batches complete
    /// first.
    struct RecordingApi {
        paths: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn new() -> Self {
            RecordingApi {
                paths: Mutex::new(Vec::new()),
            }
        }
    }

    impl FantasyApi for RecordingApi {
        async fn query(
            &self,
            resource_path: &str,
            _credential: &Credential,
        ) -> Result<Value, AppError> {
            let submitted = {
                let mut paths = self.paths.lock().unwrap();
                paths.push(resource_path.to_string());
                paths.len()
            };
            // Invert completion order relative to submission order
            tokio::time::sleep(Duration::from_millis(50 / submitted as u64)).await;
            Ok(json!({ "path": resource_path }))
        }
    }

    #[test]
    fn test_split_produces_ceil_n_over_b_batches() {
        for (n, expected_batches) in [(1usize, 1usize), (19, 1), (20, 1), (21, 2), (40, 2), (41, 3)]
        {
            let all = keys(n);
            let batches = split_into_batches(&all, PLAYERS_PER_REQUEST);
            assert_eq!(batches.len(), expected_batches, "for {n} players");
            assert_eq!(batches.len(), n.div_ceil(PLAYERS_PER_REQUEST));
        }
    }

    #[test]
    fn test_split_concatenation_reconstructs_input() {
        let all = keys(53);
        let batches = split_into_batches(&all, PLAYERS_PER_REQUEST);

        let reconstructed: Vec<PlayerKey> = batches.iter().flat_map(|b| b.to_vec()).collect();
        assert_eq!(reconstructed, all);

        // Every batch except the last is full
        for batch in &batches[..batches.len() - 1] {
            assert_eq!(batch.len(), PLAYERS_PER_REQUEST);
        }
        assert!(batches.last().unwrap().len() <= PLAYERS_PER_REQUEST);
    }

    #[tokio::test]
    async fn test_batched_fetch_preserves_submission_order() {
        let api = RecordingApi::new();
        let all = keys(45); // three batches

        let docs = fetch_player_stats_batched(&api, &test_credential(), &all)
            .await
            .unwrap();

        assert_eq!(docs.len(), 3);
        let submitted = api.paths.lock().unwrap().clone();
        assert_eq!(submitted.len(), 3);
        // Results line up with the submitted batch paths even though later
        // batches completed first
        for (doc, path) in docs.iter().zip(&submitted) {
            assert_eq!(doc["path"].as_str().unwrap(), path);
        }
        assert!(submitted[0].contains("nhl.p.000"));
        assert!(submitted[2].contains("nhl.p.044"));
    }

    #[tokio::test]
    async fn test_batched_fetch_empty_roster_issues_no_queries() {
        let api = RecordingApi::new();
        let docs = fetch_player_stats_batched(&api, &test_credential(), &[])
            .await
            .unwrap();
        assert!(docs.is_empty());
        assert!(api.paths.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_batched_fetch_propagates_batch_failure() {
        struct FailingSecondBatch;

        impl FantasyApi for FailingSecondBatch {
            async fn query(
                &self,
                resource_path: &str,
                _credential: &Credential,
            ) -> Result<Value, AppError> {
                if resource_path.contains("nhl.p.020") {
                    Err(AppError::api_server_error(500, "boom", resource_path))
                } else {
                    Ok(json!({}))
                }
            }
        }

        let all = keys(23);
        let err = fetch_player_stats_batched(&FailingSecondBatch, &test_credential(), &all)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiServerError { status: 500, .. }));
    }
}
