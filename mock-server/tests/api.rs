use std::collections::HashMap;

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Fixture, Repo, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- users ---

#[tokio::test]
async fn get_user_returns_profile() {
    let resp = app().oneshot(get("/users/octocat")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.public_repos, 7);
}

#[tokio::test]
async fn get_user_is_case_insensitive() {
    let resp = app().oneshot(get("/users/OctoCat")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_user_payload_has_expected_fields() {
    let resp = app().oneshot(get("/users/loner")).await.unwrap();
    let json: serde_json::Value = body_json(resp).await;
    for field in ["login", "name", "bio", "avatar_url", "followers", "following", "public_repos"] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert!(json["name"].is_null());
}

#[tokio::test]
async fn get_user_not_found() {
    let resp = app().oneshot(get("/users/nobody-here")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn broken_user_returns_500() {
    let resp = app().oneshot(get("/users/broken")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- repos ---

#[tokio::test]
async fn repos_sorted_by_created_newest_first() {
    let resp = app()
        .oneshot(get("/users/octocat/repos?sort=created"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let repos: Vec<Repo> = body_json(resp).await;
    let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["project-7", "project-6", "project-5", "project-4", "project-3", "project-2", "project-1"]
    );
}

#[tokio::test]
async fn repos_empty_list() {
    let resp = app().oneshot(get("/users/loner/repos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"[]");
}

#[tokio::test]
async fn flaky_repos_return_500() {
    let resp = app()
        .oneshot(get("/users/flaky/repos?sort=created"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn repos_for_unknown_user_not_found() {
    let resp = app().oneshot(get("/users/nobody-here/repos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_fixtures() {
    let fixtures = HashMap::from([(
        "Solo".to_string(),
        Fixture::Profile {
            user: User {
                login: "Solo".to_string(),
                name: None,
                bio: Some("only one".to_string()),
                avatar_url: "https://avatars.example.com/solo".to_string(),
                html_url: "https://github.example.com/solo".to_string(),
                followers: 0,
                following: 0,
                public_repos: 1,
            },
            repos: Some(vec![Repo {
                name: "single".to_string(),
                html_url: "https://github.example.com/solo/single".to_string(),
                created_at: "2024-05-05T00:00:00Z".to_string(),
            }]),
        },
    )]);

    let app = app_with(fixtures);
    let resp = app.clone().oneshot(get("/users/solo")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/users/solo/repos")).await.unwrap();
    let repos: Vec<Repo> = body_json(resp).await;
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "single");
}
