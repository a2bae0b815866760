//! End-to-end editing sessions through the public API

use readme_canvas::cards::{CardContent, TextStyle};
use readme_canvas::storage::USERNAME_KEY;
use readme_canvas::{
    CardId, CardKind, CardOptions, CardTag, Editor, EditorConfig, Error, FileUsernameStore,
    MemoryUsernameStore, ProfilePanel, UsernameStore,
};

fn offline_config() -> EditorConfig {
    EditorConfig {
        api_base_url: "http://127.0.0.1:9".into(),
        timeout_ms: 500,
        ..Default::default()
    }
}

fn fresh_editor() -> Editor {
    Editor::start(offline_config(), Box::new(MemoryUsernameStore::new()))
}

#[test]
fn first_text_card() {
    let mut editor = fresh_editor();
    let card = editor.drop_tag("text").clone();
    assert_eq!(card.id(), CardId::new(1));
    assert_eq!(card.tag(), &CardTag::Known(CardKind::Text));
    assert!(card.options().is_none());
    match card.content().content() {
        Some(CardContent::Text { text, style, .. }) => {
            assert!(text.is_empty());
            assert_eq!(style, &TextStyle::new("16px", "normal"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn text_then_image_keeps_order() {
    let mut editor = fresh_editor();
    editor.drop_tag("text");
    editor.drop_tag("image");
    let ids: Vec<u32> = editor.cards().iter().map(|c| c.id().get()).collect();
    let tags: Vec<&str> = editor.cards().iter().map(|c| c.tag().as_str()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(tags, vec!["text", "image"]);
}

#[test]
fn customize_then_save_applies_options() {
    let mut editor = fresh_editor();
    let id = editor.drop_tag("text").id();
    editor.customize(id).unwrap();

    let opts = CardOptions::new().with_text("hello").with_text_style("20px", "bold");
    editor.save_customization(opts.clone()).unwrap();

    let card = editor.store().get(id).unwrap();
    assert_eq!(card.options(), Some(&opts));
    assert_eq!(card.content(), &editor.store().registry().render(card.tag(), Some(&opts)));
    assert!(editor.session().is_idle());
}

#[test]
fn cancel_then_begin_again() {
    let mut editor = fresh_editor();
    let id = editor.drop_tag("markdown").id();
    editor.customize(id).unwrap();
    editor.cancel_customization();
    assert!(editor.session().is_idle());
    assert!(editor.cards()[0].options().is_none());
    assert_eq!(
        editor.save_customization(CardOptions::new()).unwrap_err(),
        Error::NoActiveSelection
    );

    editor.customize(id).unwrap();
    editor
        .save_customization(CardOptions::new().with_markdown("# Hi"))
        .unwrap();
    assert_eq!(editor.export_markdown(), "# Hi\n");
}

#[test]
fn persisted_username_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let config = EditorConfig {
        state_path: Some(path.clone()),
        ..offline_config()
    };

    let mut editor = Editor::start(
        config.clone(),
        Box::new(FileUsernameStore::from_config(&config).unwrap()),
    );
    assert_eq!(editor.username(), None);
    editor.submit_username("  octocat  ").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains(USERNAME_KEY));

    let mut restarted = Editor::start(config.clone(), Box::new(FileUsernameStore::new(&path)));
    assert_eq!(restarted.username(), Some("octocat"));
    // Cards are not persisted
    assert!(restarted.cards().is_empty());
    let id = restarted.drop_tag("profile").id();
    match restarted.store().get(id).unwrap().content().content() {
        Some(CardContent::Profile { title, .. }) => assert_eq!(title, "octocat's Profile"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn corrupt_state_starts_without_username() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let editor = Editor::start(offline_config(), Box::new(FileUsernameStore::new(&path)));
    assert_eq!(editor.username(), None);
    assert_eq!(editor.profile(), &ProfilePanel::Unavailable);
}

#[test]
fn memory_store_is_usable_directly() {
    let mut store = MemoryUsernameStore::new();
    assert!(matches!(store.save(""), Err(Error::InvalidUsername(_))));
    store.save("hubot").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("hubot"));
}

#[cfg(feature = "github")]
mod with_lookup {
    use super::*;
    use tiny_http::{Response, Server};

    fn mock_github(body: &'static str) -> EditorConfig {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr();
        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let _ = request.respond(Response::from_string(body));
            }
        });
        EditorConfig {
            api_base_url: format!("http://{}", addr),
            timeout_ms: 5_000,
            ..Default::default()
        }
    }

    #[test]
    fn profile_panel_fills_in_after_start() {
        let config = mock_github(r#"{"name":"The Octocat","followers":42}"#);
        let mut editor = Editor::start(config, Box::new(MemoryUsernameStore::with_username("octocat")));
        assert_eq!(editor.profile(), &ProfilePanel::Loading);

        // Editing goes on while the lookup is pending
        let id = editor.drop_tag("text").id();
        editor.customize(id).unwrap();
        editor.save_customization(CardOptions::new().with_text("hi")).unwrap();

        match editor.wait_for_profile() {
            ProfilePanel::Ready(summary) => {
                assert_eq!(summary.name, "The Octocat");
                assert_eq!(summary.followers, 42);
                assert_eq!(summary.bio, "No bio available");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(editor.export_markdown(), "hi\n");
    }

    #[test]
    fn resubmitting_username_retriggers_lookup() {
        let config = mock_github("{}");
        let mut editor = Editor::start(config, Box::new(MemoryUsernameStore::new()));
        assert_eq!(editor.profile(), &ProfilePanel::Unavailable);

        editor.submit_username("mona").unwrap();
        assert_eq!(editor.profile(), &ProfilePanel::Loading);
        assert!(matches!(editor.wait_for_profile(), ProfilePanel::Ready(s) if s.name == "GitHub User"));
        // Nothing pending any more
        assert!(matches!(editor.poll_profile(), ProfilePanel::Ready(_)));
    }

    #[tokio::test]
    async fn wait_for_profile_from_async_code_goes_through_spawn_blocking() {
        let config = mock_github(r#"{"name":"Mona"}"#);
        let mut editor = Editor::start(config, Box::new(MemoryUsernameStore::with_username("mona")));

        let editor = tokio::task::spawn_blocking(move || {
            editor.wait_for_profile();
            editor
        })
        .await
        .unwrap();
        assert!(matches!(editor.profile(), ProfilePanel::Ready(s) if s.name == "Mona"));
    }
}
