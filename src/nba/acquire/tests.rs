//! Unit tests for cache-aware acquisition

use super::*;
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn game_log_body(player_id: u64, name: &str) -> serde_json::Value {
    json!({
        "resultSets": [{
            "name": "LeagueGameLog",
            "headers": ["PLAYER_ID", "PLAYER_NAME", "TEAM_ABBREVIATION", "GAME_ID", "MIN", "PTS", "AST", "REB"],
            "rowSet": [[player_id, name, "BOS", "0021900001", 30, 12, 3, 4]]
        }]
    })
}

fn draft_body(rows: serde_json::Value) -> serde_json::Value {
    json!({
        "resultSets": [{
            "name": "DraftHistory",
            "headers": ["PERSON_ID", "PLAYER_NAME", "SEASON", "ROUND_NUMBER", "OVERALL_PICK", "TEAM_ABBREVIATION"],
            "rowSet": rows
        }]
    })
}

fn cached(dir: &TempDir, refresh: bool) -> CachePolicy {
    CachePolicy {
        root: Some(dir.path().to_path_buf()),
        refresh,
    }
}

async fn client(server: &MockServer) -> StatsClient {
    StatsClient::new(Some(&server.uri()), Duration::from_secs(5)).unwrap()
}

#[cfg(test)]
mod cache_policy_tests {
    use super::*;

    #[tokio::test]
    async fn test_second_fetch_hits_cache() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(1, "A")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let policy = cached(&dir, false);

        let (first, status) =
            fetch_season_logs(&client, Season::new(2020), SeasonType::Regular, &policy)
                .await
                .unwrap();
        assert_eq!(status, CacheStatus::Miss);

        let (second, status) =
            fetch_season_logs(&client, Season::new(2020), SeasonType::Regular, &policy)
                .await
                .unwrap();
        assert_eq!(status, CacheStatus::Hit);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(1, "A")))
            .expect(2)
            .mount(&server)
            .await;

        let client = client(&server).await;
        fetch_season_logs(&client, Season::new(2020), SeasonType::Regular, &cached(&dir, false))
            .await
            .unwrap();
        let (_, status) =
            fetch_season_logs(&client, Season::new(2020), SeasonType::Regular, &cached(&dir, true))
                .await
                .unwrap();
        assert_eq!(status, CacheStatus::Refreshed);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_fetches() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(1, "A")))
            .expect(2)
            .mount(&server)
            .await;

        let client = client(&server).await;
        for _ in 0..2 {
            let (_, status) = fetch_season_logs(
                &client,
                Season::new(2020),
                SeasonType::Regular,
                &CachePolicy::disabled(),
            )
            .await
            .unwrap();
            assert_eq!(status, CacheStatus::Bypassed);
        }
    }
}

#[cfg(test)]
mod live_data_tests {
    use super::*;
    use crate::core::{draft_path, game_logs_path};

    #[test]
    fn test_settled_boundaries_follow_clock() {
        let current = Season::current();
        assert!(!season_is_settled(current));
        assert!(season_is_settled(Season::new(current.as_u16() - 1)));

        // Drafted last summer: rookies are already playing.
        assert!(draft_is_settled(DraftYear::new(current.as_u16() - 1)));
        assert!(!draft_is_settled(DraftYear::new(current.as_u16())));
    }

    #[tokio::test]
    async fn test_current_season_is_refetched_every_run() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let current = Season::current();

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .and(query_param("Season", current.to_api_string().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(1, "A")))
            .expect(2)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let policy = cached(&dir, false);
        for _ in 0..2 {
            let (logs, status) =
                fetch_season_logs(&client, current, SeasonType::Regular, &policy)
                    .await
                    .unwrap();
            assert_eq!(status, CacheStatus::Live);
            assert_eq!(logs.len(), 1);
        }

        assert!(!game_logs_path(dir.path(), current, SeasonType::Regular).exists());
    }

    #[tokio::test]
    async fn test_stale_cache_file_for_current_season_is_ignored() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let current = Season::current();

        // Left behind by an earlier run.
        let stale = game_logs_path(dir.path(), current, SeasonType::Regular);
        std::fs::write(&stale, "[]").unwrap();

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(7, "Fresh")))
            .expect(1)
            .mount(&server)
            .await;

        let (logs, status) = fetch_season_logs(
            &client(&server).await,
            current,
            SeasonType::Regular,
            &cached(&dir, false),
        )
        .await
        .unwrap();

        assert_eq!(status, CacheStatus::Live);
        assert_eq!(logs[0].player_name, "Fresh");
    }

    #[tokio::test]
    async fn test_upcoming_draft_is_not_cached() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let upcoming = DraftYear::new(Season::current().as_u16());

        Mock::given(method("GET"))
            .and(path("/drafthistory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(draft_body(json!([
                [1, "A", upcoming.to_string(), 1, 1, "PHX"]
            ]))))
            .expect(2)
            .mount(&server)
            .await;

        let client = client(&server).await;
        for _ in 0..2 {
            fetch_draft_roster(&client, &[upcoming], &cached(&dir, false))
                .await
                .unwrap();
        }
        assert!(!draft_path(dir.path(), upcoming).exists());
    }
}

#[cfg(test)]
mod fetch_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_game_logs_concatenates_seasons_in_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .and(query_param("Season", "2019-20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(1, "A")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .and(query_param("Season", "2020-21"))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(2, "B")))
            .mount(&server)
            .await;

        let logs = fetch_game_logs(
            &client(&server).await,
            &[Season::new(2020), Season::new(2021)],
            SeasonType::Regular,
            &CachePolicy::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].season, Season::new(2020));
        assert_eq!(logs[0].player_name, "A");
        assert_eq!(logs[1].season, Season::new(2021));
        assert_eq!(logs[1].player_name, "B");
    }

    #[tokio::test]
    async fn test_empty_draft_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/drafthistory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(draft_body(json!([]))))
            .mount(&server)
            .await;

        let err = fetch_draft_roster(
            &client(&server).await,
            &[DraftYear::new(2030)],
            &CachePolicy::disabled(),
        )
        .await
        .unwrap_err();

        match err {
            DraftGraphError::EmptyRoster { draft_years } => assert_eq!(draft_years, "2030"),
            other => panic!("Expected EmptyRoster, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_snapshot() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/drafthistory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(draft_body(json!([
                [1, "A", "2018", 1, 1, "PHX"]
            ]))))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/leaguegamelog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body(1, "A")))
            .mount(&server)
            .await;

        let snapshot = fetch_snapshot(
            &client(&server).await,
            &[DraftYear::new(2018)],
            &[Season::new(2019)],
            SeasonType::Regular,
            &CachePolicy::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(snapshot.roster.len(), 1);
        assert_eq!(snapshot.roster.draft_years, vec![DraftYear::new(2018)]);
        assert_eq!(snapshot.logs.len(), 1);
    }
}
