use percent_encoding::percent_decode_str;
use riftteam_api::types::{
    Activity, Ambiance, PlayerCreateRequest, PlayerUpdateRequest, RiotCheckResponse, Role,
    TeamCreateRequest, TeamUpdateRequest, Tier,
};
use riftteam_api::{Client, Error, Method, PlayerQuery, Query, RequestOptions, ScrimQuery, TeamQuery};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&format!("{}/api", server.uri()))
}

#[tokio::test]
async fn check_riot_id_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/riot/check/Faker/KR1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("riot_check.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let account = client.check_riot_id("Faker", "KR1").await.unwrap();
    assert_eq!(
        account,
        RiotCheckResponse {
            game_name: "Faker".to_string(),
            tag_line: "KR1".to_string(),
            puuid: "abc".to_string(),
            summoner_level: Some(412),
            profile_icon_id: Some(29),
        }
    );
}

#[tokio::test]
async fn delete_player_with_bad_token_is_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/players/some-slug"))
        .and(query_param("token", "badtoken"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.delete_player("some-slug", "badtoken").await.unwrap_err();
    match &err {
        Error::Api { status, message } => {
            assert_eq!(*status, 403);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn delete_player_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/players/Faker-KR1"))
        .and(query_param("token", "tok"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.delete_player("Faker-KR1", "tok").await.unwrap();
}

#[tokio::test]
async fn no_content_ignores_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/teams/les-bg"))
        .respond_with(ResponseTemplate::new(204).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value: Option<serde_json::Value> = client
        .request("/teams/les-bg", RequestOptions::new(Method::DELETE))
        .await
        .unwrap();
    assert!(value.is_none());
}

#[tokio::test]
async fn no_content_where_body_expected_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/Faker-KR1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_player("Faker-KR1", None).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn success_returns_decoded_body() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("player.json");

    Mock::given(method("GET"))
        .and(path("/api/players/Faker-KR1"))
        .and(query_param_is_missing("token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let raw: serde_json::Value = client
        .request("/players/Faker-KR1", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(raw, serde_json::from_str::<serde_json::Value>(&body).unwrap());

    let player = client.get_player("Faker-KR1", None).await.unwrap();
    assert_eq!(player.slug, "Faker-KR1");
    assert_eq!(player.rank_solo_tier, Some(Tier::Challenger));
    assert_eq!(player.champions.len(), 2);
}

#[tokio::test]
async fn get_player_with_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/Faker-KR1"))
        .and(query_param("token", "edit-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("player.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let player = client.get_player("Faker-KR1", Some("edit-token")).await.unwrap();
    assert_eq!(player.discord_username.as_deref(), Some("faker"));
}

#[tokio::test]
async fn error_without_json_body_uses_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>not here</html>"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/teams/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.get_player("nobody", None).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), Some("Not Found"));
    assert!(err.is_not_found());

    let err = client.get_team("broken", None).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), Some("Internal Server Error"));
}

#[tokio::test]
async fn validation_error_details_are_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/players/Faker-KR1"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "description"], "msg": "String should have at most 500 characters", "type": "string_too_long"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let update = PlayerUpdateRequest {
        description: Some("x".repeat(600)),
        ..Default::default()
    };
    let err = client.update_player("Faker-KR1", &update, "tok").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.message(), Some("String should have at most 500 characters"));
}

#[tokio::test]
async fn path_segments_are_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("riot_check.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let name = "Hide on bush/?#";
    let tag = "K R#1";
    client.check_riot_id(name, tag).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let url = &requests[0].url;
    assert!(url.query().is_none());
    assert!(url.fragment().is_none());

    let segments: Vec<String> = url
        .path_segments()
        .unwrap()
        .map(|s| percent_decode_str(s).decode_utf8().unwrap().into_owned())
        .collect();
    assert_eq!(segments, vec!["api", "riot", "check", name, tag]);
}

#[tokio::test]
async fn dot_segments_are_rejected_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_team("..", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidPathSegment(ref s) if s == ".."));
}

#[tokio::test]
async fn repeated_get_hits_server_each_time() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teams/les-bg"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("team.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first = client.get_team("les-bg", None).await.unwrap();
    let second = client.get_team("les-bg", None).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn sends_json_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tokens/abc/validate"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("token.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let info = client.validate_token("abc").await.unwrap();
    assert_eq!(info.slug.as_deref(), Some("les-bg"));
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/echo"))
        .and(header("content-type", "text/plain"))
        .and(header("x-request-source", "cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = RequestOptions::new(Method::POST)
        .with_body("hello")
        .with_header(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("text/plain"),
        )
        .with_header(
            reqwest::header::HeaderName::from_static("x-request-source"),
            reqwest::header::HeaderValue::from_static("cli"),
        );
    let value: serde_json::Value = client.request("/echo", options).await.unwrap();
    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn create_player_sends_token_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/players"))
        .and(query_param("token", "create-tok"))
        .and(body_json(json!({
            "description": "Mid main",
            "activities": ["SCRIMS"],
            "is_lft": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("player.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = PlayerCreateRequest {
        description: Some("Mid main".to_string()),
        activities: Some(vec![Activity::Scrims]),
        is_lft: Some(true),
        ..Default::default()
    };
    let player = client.create_player(&data, "create-tok").await.unwrap();
    assert_eq!(player.riot_id(), "Faker#KR1");
}

#[tokio::test]
async fn list_players_sends_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players"))
        .and(query_param("is_lft", "true"))
        .and(query_param("role", "TOP"))
        .and(query_param("min_rank", "GOLD"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("players.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = PlayerQuery::default()
        .with_lft(true)
        .with_role(Role::Top)
        .with_min_rank(Tier::Gold)
        .with_limit(10);
    let resp = client.list_players(&query).await.unwrap();
    assert_eq!(resp.total, 42);
    assert_eq!(resp.players.len(), 2);
}

#[tokio::test]
async fn list_teams_and_scrims() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .and(query_param("is_lfp", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("teams.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/scrims"))
        .and(query_param("max_rank", "PLATINUM"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("scrims.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let teams = client
        .list_teams(&TeamQuery::default().with_lfp(true))
        .await
        .unwrap();
    assert_eq!(teams.teams.len(), 2);

    let scrims = client
        .list_scrims(&ScrimQuery::default().with_max_rank(Tier::Platinum))
        .await
        .unwrap();
    assert_eq!(scrims.total, 1);
    assert_eq!(scrims.scrims[0].team.slug, "les-bg");
}

#[tokio::test]
async fn check_team_name_with_exclusion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teams/check-name/Les%20Bg"))
        .and(query_param("exclude_slug", "les-bg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"available": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let availability = client
        .check_team_name("Les Bg", Some("les-bg"))
        .await
        .unwrap();
    assert!(availability.available);
}

#[tokio::test]
async fn refresh_cooldown_surfaces_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/players/Faker-KR1/refresh"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"detail": "Refresh disponible dans 42 minutes"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.refresh_player("Faker-KR1").await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.message(), Some("Refresh disponible dans 42 minutes"));
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/scrims"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"scrims": "nope", "total": 0})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_teams(&TeamQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    let err = client.list_scrims(&ScrimQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn transport_failure_is_not_an_api_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = Client::with_base_url(&format!("http://127.0.0.1:{}/api", port));
    let err = client.get_player("Faker-KR1", None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.message(), None);
}

// -- Team mutations --

#[tokio::test]
async fn create_team_sends_token_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/teams"))
        .and(query_param("token", "t1"))
        .and(body_json(json!({
            "activities": ["SCRIMS", "CLASH"],
            "ambiance": "FUN",
            "wanted_roles": ["JUNGLE"],
            "min_rank": "GOLD",
            "is_lfp": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("team.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = TeamCreateRequest {
        activities: Some(vec![Activity::Scrims, Activity::Clash]),
        ambiance: Some(Ambiance::Fun),
        wanted_roles: Some(vec![Role::Jungle]),
        min_rank: Some(Tier::Gold),
        is_lfp: Some(true),
        ..Default::default()
    };
    let team = client.create_team(&data, "t1").await.unwrap();
    assert_eq!(team.slug, "les-bg");
}

#[tokio::test]
async fn update_team_encodes_slug_and_skips_unset_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/teams/a%20b"))
        .and(query_param("token", "t2"))
        .and(body_json(json!({"name": "Les Bg", "is_lfp": false})))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("team.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = TeamUpdateRequest {
        name: Some("Les Bg".to_string()),
        is_lfp: Some(false),
        ..Default::default()
    };
    let team = client.update_team("a b", &data, "t2").await.unwrap();
    assert_eq!(team.name, "Les Bg");
}

#[tokio::test]
async fn delete_team_no_content_ignores_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/teams/les-bg"))
        .and(query_param("token", "t3"))
        .respond_with(ResponseTemplate::new(204).set_body_string("garbage"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.delete_team("les-bg", "t3").await.unwrap();
}

#[tokio::test]
async fn create_team_conflict_uses_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/teams"))
        .and(query_param("token", "t4"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .create_team(&TeamCreateRequest::default(), "t4")
        .await
        .unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Conflict");
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
}
