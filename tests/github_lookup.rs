#![cfg(feature = "github")]
//! Profile lookup against a mocked GitHub users endpoint

use readme_canvas::{EditorConfig, Error, GitHubClient, ProfileLookup};
use std::sync::mpsc;
use tiny_http::{Header, Response, Server};

struct Served {
    url: String,
    user_agent: Option<String>,
}

/// Serve one request with `status` and `body`; report what was requested.
fn serve_once(status: u16, body: &'static str) -> (EditorConfig, mpsc::Receiver<Served>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let user_agent = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("User-Agent"))
                .map(|h| h.value.to_string());
            let _ = tx.send(Served {
                url: request.url().to_string(),
                user_agent,
            });
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header("Content-Type: application/json".parse::<Header>().unwrap());
            let _ = request.respond(response);
        }
    });

    let config = EditorConfig {
        api_base_url: format!("http://{}", addr),
        timeout_ms: 5_000,
        ..Default::default()
    };
    (config, rx)
}

#[test]
fn empty_payload_gets_placeholders() {
    let (config, served) = serve_once(200, "{}");
    let client = GitHubClient::new(&config).unwrap();
    let profile = client.fetch("octocat").expect("lookup should succeed");

    assert_eq!(profile.name, "GitHub User");
    assert_eq!(profile.bio, "No bio available");
    assert_eq!(profile.location, "Unknown");
    assert_eq!(profile.followers, 0);
    assert_eq!(profile.following, 0);
    assert_eq!(profile.public_repos, 0);

    let req = served.recv().unwrap();
    assert_eq!(req.url, "/users/octocat");
    assert!(req.user_agent.unwrap().starts_with("readme-canvas/"));
}

#[test]
fn not_found_is_a_failure() {
    let (config, _served) = serve_once(404, r#"{"message":"Not Found"}"#);
    let client = GitHubClient::new(&config).unwrap();
    match client.fetch("nonexistent-user-404") {
        Err(Error::Failure(msg)) => assert!(msg.contains("404"), "{msg}"),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn malformed_payload_is_a_failure() {
    let (config, _served) = serve_once(200, "<html>rate limited</html>");
    let client = GitHubClient::new(&config).unwrap();
    assert!(matches!(client.fetch("octocat"), Err(Error::Failure(_))));
}

#[test]
fn full_payload_is_normalized() {
    let (config, _served) = serve_once(
        200,
        r#"{
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "bio": null,
            "location": "San Francisco",
            "blog": "https://github.blog",
            "followers": 17000,
            "following": 9,
            "public_repos": 8
        }"#,
    );
    let client = GitHubClient::new(&config).unwrap();
    let profile = client.fetch("  octocat ").unwrap();
    assert_eq!(profile.name, "The Octocat");
    assert_eq!(profile.avatar_url, "https://avatars.githubusercontent.com/u/583231?v=4");
    assert_eq!(profile.bio, "No bio available");
    assert_eq!(profile.blog, "https://github.blog");
    assert_eq!(profile.followers, 17000);
}

#[test]
fn spawned_lookup_can_be_polled_to_completion() {
    let (config, _served) = serve_once(200, r#"{"name":"Mona"}"#);
    let mut lookup = ProfileLookup::spawn(config, "mona");
    assert_eq!(lookup.username(), "mona");

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    let res = loop {
        if let Some(res) = lookup.try_result() {
            break res;
        }
        assert!(std::time::Instant::now() < deadline, "lookup never finished");
        std::thread::sleep(std::time::Duration::from_millis(10));
    };
    assert_eq!(res.unwrap().name, "Mona");
}

#[tokio::test]
async fn spawned_lookup_can_be_awaited() {
    let (config, _served) = serve_once(404, "{}");
    let res = ProfileLookup::spawn(config, "nonexistent-user-404").wait().await;
    assert!(matches!(res, Err(Error::Failure(_))));
}

#[test]
fn dropped_lookup_does_not_disturb_anything() {
    let (config, served) = serve_once(200, "{}");
    drop(ProfileLookup::spawn(config, "octocat"));
    // The request still goes out; its result is discarded
    let req = served.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
    assert_eq!(req.url, "/users/octocat");
}

#[tokio::test]
async fn blocking_wait_runs_off_the_async_workers() {
    let (config, _served) = serve_once(200, r#"{"name":"Mona"}"#);
    let lookup = ProfileLookup::spawn(config, "mona");
    let res = tokio::task::spawn_blocking(move || lookup.wait_blocking())
        .await
        .unwrap();
    assert_eq!(res.unwrap().name, "Mona");
}
