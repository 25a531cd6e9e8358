//! End-to-end lookups against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the controller over
//! real HTTP through a ureq-backed `Transport`. Validates request building,
//! response parsing, and the controller's rendering against the server's
//! actual payloads.

use std::net::SocketAddr;

use async_trait::async_trait;
use profile_core::controller::{
    ITEMS_UNAVAILABLE_MESSAGE, NOT_FOUND_MESSAGE, TRANSIENT_MESSAGE,
};
use profile_core::view::ErrorCard;
use profile_core::{
    Completion, Controller, DisplayHandle, HttpRequest, HttpResponse, ItemsSlot, LookupClient,
    LookupService, Root, Transport, TransportError, UiState,
};

/// Executes requests with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data, leaving status interpretation to the core.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder
            .call()
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn controller(base: &str) -> Controller<UreqTransport> {
    let client = LookupClient::new(base).unwrap();
    Controller::new(
        LookupService::new(client, UreqTransport::new()),
        DisplayHandle::new(),
    )
}

fn error_root(message: &str) -> Root {
    Root::Error(ErrorCard {
        message: message.to_string(),
    })
}

#[tokio::test]
async fn lookup_lifecycle() {
    let addr = start_mock_server();
    let controller = controller(&format!("http://{addr}/users"));

    // Step 1: empty input does nothing.
    controller.set_search("");
    assert_eq!(controller.submit().await, None);
    assert_eq!(controller.state(), UiState::Idle);

    // Step 2: full profile with seven repos, newest five shown.
    controller.set_search("octocat");
    assert_eq!(controller.submit().await, Some(Completion::Applied));
    let screen = controller.display().snapshot();
    assert_eq!(screen.search(), "");
    let Root::Card(card) = screen.root() else {
        panic!("expected card, got {:?}", screen.root());
    };
    assert_eq!(card.display_name, "The Octocat");
    assert_eq!(card.bio.as_deref(), Some("GitHub mascot"));
    let ItemsSlot::Links(links) = &card.items else {
        panic!("expected links, got {:?}", card.items);
    };
    let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(
        labels,
        ["project-7", "project-6", "project-5", "project-4", "project-3"]
    );
    assert_eq!(
        links[0].href,
        "https://github.example.com/octocat/project-7"
    );

    // Step 3: profile without name, bio, or repos.
    controller.set_search("loner");
    controller.submit().await;
    let screen = controller.display().snapshot();
    let Root::Card(card) = screen.root() else {
        panic!("expected card, got {:?}", screen.root());
    };
    assert_eq!(card.display_name, "loner");
    assert!(card.bio.is_none());
    assert_eq!(card.items, ItemsSlot::Links(Vec::new()));

    // Step 4: repo listing fails, card stays.
    controller.set_search("flaky");
    controller.submit().await;
    assert_eq!(controller.state(), UiState::EntityDisplayed);
    let screen = controller.display().snapshot();
    let Root::Card(card) = screen.root() else {
        panic!("expected card, got {:?}", screen.root());
    };
    assert_eq!(
        card.items,
        ItemsSlot::Unavailable(ITEMS_UNAVAILABLE_MESSAGE.to_string())
    );

    // Step 5: unknown profile.
    controller.set_search("nobody-here");
    controller.submit().await;
    assert_eq!(controller.display().snapshot().root(), &error_root(NOT_FOUND_MESSAGE));

    // Step 6: server error.
    controller.set_search("broken");
    controller.submit().await;
    assert_eq!(controller.display().snapshot().root(), &error_root(TRANSIENT_MESSAGE));
}

#[tokio::test]
async fn unreachable_host_is_transient() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let controller = controller(&format!("http://{addr}/users"));

    controller.set_search("octocat");
    controller.submit().await;
    assert_eq!(controller.display().snapshot().root(), &error_root(TRANSIENT_MESSAGE));
}
