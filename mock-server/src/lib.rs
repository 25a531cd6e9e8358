use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub html_url: String,
    pub created_at: String,
}

/// What the server answers for one login.
#[derive(Clone, Debug)]
pub enum Fixture {
    /// `repos: None` makes the listing answer 500.
    Profile { user: User, repos: Option<Vec<Repo>> },
    /// The profile endpoint itself answers 500.
    Broken,
}

#[derive(Deserialize)]
pub struct ReposQuery {
    pub sort: Option<String>,
}

pub type Db = Arc<HashMap<String, Fixture>>;

/// Router over the built-in fixtures.
pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(fixtures: HashMap<String, Fixture>) -> Router {
    let db: Db = Arc::new(
        fixtures
            .into_iter()
            .map(|(login, fixture)| (login.to_lowercase(), fixture))
            .collect(),
    );
    Router::new()
        .route("/users/{login}", get(get_user))
        .route("/users/{login}/repos", get(list_repos))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Fixtures covering every outcome a lookup can have:
///
/// - `octocat`: seven repos, stored oldest first
/// - `loner`: no name, no bio, no repos
/// - `flaky`: profile works, repo listing fails
/// - `broken`: profile endpoint fails
pub fn seed() -> HashMap<String, Fixture> {
    let octocat_repos: Vec<Repo> = (1..=7)
        .map(|i| repo("octocat", &format!("project-{i}"), &format!("2020-0{i}-01T00:00:00Z")))
        .collect();

    HashMap::from([
        (
            "octocat".to_string(),
            Fixture::Profile {
                user: user("octocat", Some("The Octocat"), Some("GitHub mascot"), 7),
                repos: Some(octocat_repos),
            },
        ),
        (
            "loner".to_string(),
            Fixture::Profile {
                user: user("loner", None, None, 0),
                repos: Some(Vec::new()),
            },
        ),
        (
            "flaky".to_string(),
            Fixture::Profile {
                user: user("flaky", Some("Flaky"), None, 3),
                repos: None,
            },
        ),
        ("broken".to_string(), Fixture::Broken),
    ])
}

fn user(login: &str, name: Option<&str>, bio: Option<&str>, public_repos: u64) -> User {
    User {
        login: login.to_string(),
        name: name.map(str::to_string),
        bio: bio.map(str::to_string),
        avatar_url: format!("https://avatars.example.com/{login}"),
        html_url: format!("https://github.example.com/{login}"),
        followers: 42,
        following: 7,
        public_repos,
    }
}

fn repo(owner: &str, name: &str, created_at: &str) -> Repo {
    Repo {
        name: name.to_string(),
        html_url: format!("https://github.example.com/{owner}/{name}"),
        created_at: created_at.to_string(),
    }
}

async fn get_user(
    State(db): State<Db>,
    Path(login): Path<String>,
) -> Result<Json<User>, StatusCode> {
    debug!(%login, "get user");
    match db.get(&login.to_lowercase()) {
        Some(Fixture::Profile { user, .. }) => Ok(Json(user.clone())),
        Some(Fixture::Broken) => Err(StatusCode::INTERNAL_SERVER_ERROR),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn list_repos(
    State(db): State<Db>,
    Path(login): Path<String>,
    Query(query): Query<ReposQuery>,
) -> Result<Json<Vec<Repo>>, StatusCode> {
    debug!(%login, sort = ?query.sort, "list repos");
    let repos = match db.get(&login.to_lowercase()) {
        Some(Fixture::Profile {
            repos: Some(repos), ..
        }) => repos,
        Some(_) => return Err(StatusCode::INTERNAL_SERVER_ERROR),
        None => return Err(StatusCode::NOT_FOUND),
    };
    Ok(Json(sorted(repos, query.sort.as_deref())))
}

/// `sort=created` lists newest first; anything else sorts by name.
fn sorted(repos: &[Repo], sort: Option<&str>) -> Vec<Repo> {
    let mut repos = repos.to_vec();
    match sort {
        Some("created") => repos.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        _ => repos.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    repos
}
