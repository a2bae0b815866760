//! Editor: the card store, the customization session and the persisted
//! username wired together with their lifecycle points.
//!
//! `Editor::start` is the session-start point: it loads the saved username and
//! fires the profile lookup. `Editor::submit_username` is the only place the
//! username is written. Card operations never wait on the lookup.

use crate::cards::{Card, CardId, CardOptions, CardRegistry, CardTag};
use crate::export;
use crate::profile::ProfileSummary;
use crate::session::CustomizationSession;
use crate::storage::UsernameStore;
use crate::store::CardStore;
use crate::{EditorConfig, Error, Result};

#[cfg(feature = "github")]
use crate::lookup::ProfileLookup;

/// State of the read-only profile panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePanel {
    /// A lookup is in flight
    Loading,
    Ready(ProfileSummary),
    /// No username, or the lookup failed
    Unavailable,
}

pub struct Editor {
    config: EditorConfig,
    usernames: Box<dyn UsernameStore>,
    username: Option<String>,
    store: CardStore,
    session: CustomizationSession,
    profile: ProfilePanel,
    #[cfg(feature = "github")]
    lookup: Option<ProfileLookup>,
}

impl Editor {
    /// Start a session: load the saved username and, if there is one, begin
    /// the profile lookup. A storage failure only means starting without a
    /// username.
    pub fn start(config: EditorConfig, usernames: Box<dyn UsernameStore>) -> Self {
        let username = match usernames.load() {
            Ok(name) => name,
            Err(e) => {
                log::warn!("could not load saved username: {}", e);
                None
            }
        };

        let registry = CardRegistry::new(username.clone().unwrap_or_default());
        let mut editor = Self {
            config,
            usernames,
            username,
            store: CardStore::new(registry),
            session: CustomizationSession::new(),
            profile: ProfilePanel::Unavailable,
            #[cfg(feature = "github")]
            lookup: None,
        };
        editor.refresh_profile();
        editor
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Save a new username, re-render cards for it and re-trigger the lookup.
    pub fn submit_username(&mut self, raw: &str) -> Result<()> {
        let username = self.usernames.save(raw)?;
        self.store.set_username(username.clone());
        self.username = Some(username);
        self.refresh_profile();
        Ok(())
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.store.list()
    }

    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Drop a tag from the card picker onto the canvas.
    pub fn drop_tag(&mut self, raw: &str) -> &Card {
        self.store.add_card(CardTag::parse(raw))
    }

    pub fn add_card(&mut self, tag: impl Into<CardTag>) -> &Card {
        self.store.add_card(tag)
    }

    /// Open the customization session for card `id`.
    pub fn customize(&mut self, id: CardId) -> Result<()> {
        let card = self.store.get(id).ok_or(Error::NotFound(id))?;
        self.session.begin(card);
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &CustomizationSession {
        &self.session
    }

    pub fn save_customization(&mut self, options: CardOptions) -> Result<&Card> {
        self.session.commit(&mut self.store, options)
    }

    pub fn cancel_customization(&mut self) {
        self.session.cancel();
    }

    #[must_use]
    pub fn export_markdown(&self) -> String {
        export::to_markdown(self.store.list())
    }

    #[must_use]
    pub fn profile(&self) -> &ProfilePanel {
        &self.profile
    }

    /// Pick up the lookup result if it has arrived.
    pub fn poll_profile(&mut self) -> &ProfilePanel {
        self.collect_lookup(false);
        &self.profile
    }

    /// Block until the pending lookup, if any, resolves.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a tokio runtime while a lookup is
    /// pending, as `ProfileLookup::wait_blocking` does. From async code,
    /// call it through `tokio::task::spawn_blocking` or use
    /// [`poll_profile`](Self::poll_profile).
    pub fn wait_for_profile(&mut self) -> &ProfilePanel {
        self.collect_lookup(true);
        &self.profile
    }

    #[cfg(feature = "github")]
    fn collect_lookup(&mut self, block: bool) {
        let res = if block {
            self.lookup.take().map(ProfileLookup::wait_blocking)
        } else {
            self.lookup.as_mut().and_then(ProfileLookup::try_result)
        };
        if let Some(res) = res {
            self.profile = panel_for(res);
            self.lookup = None;
        }
    }

    #[cfg(not(feature = "github"))]
    fn collect_lookup(&mut self, _block: bool) {}

    #[cfg(feature = "github")]
    fn refresh_profile(&mut self) {
        // A still-running earlier lookup is left to finish on its own
        self.lookup = self
            .username
            .as_ref()
            .map(|name| ProfileLookup::spawn(self.config.clone(), name.clone()));
        self.profile = match self.lookup {
            Some(_) => ProfilePanel::Loading,
            None => ProfilePanel::Unavailable,
        };
    }

    #[cfg(not(feature = "github"))]
    fn refresh_profile(&mut self) {
        self.profile = ProfilePanel::Unavailable;
    }
}

#[cfg(feature = "github")]
fn panel_for(res: Result<ProfileSummary>) -> ProfilePanel {
    match res {
        Ok(summary) => ProfilePanel::Ready(summary),
        Err(_) => ProfilePanel::Unavailable,
    }
}
