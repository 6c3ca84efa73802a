//! Repository menu synchronizer implementation

use crate::menu::{Menu, MenuAction, MenuHost, MenuOption, ADD_REPOSITORY_LABEL, APPS_MENU};
use crate::repository::{normalize_url, RepositorySet};
use crate::source::{AppPayload, AppSource, Listing};
use crate::{PockitError, Result};
use futures::future::join_all;
use std::time::Duration;

/// Receives app payloads and turns them into live app windows
pub trait AppLauncher {
    fn create_app(&mut self, payload: AppPayload) -> Result<()>;
}

/// The add-repository form
pub trait RepositoryPrompt {
    /// Show the form
    fn open(&mut self);

    /// Dismiss the form
    fn close(&mut self);
}

/// Result of an add-repository request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended and the menu was rebuilt
    Added,

    /// Already present, nothing changed
    Duplicate,

    /// Blank or non-http(s) input, nothing changed
    Rejected,
}

/// Owns the repository set for one host session and keeps the Apps menu
/// in step with it
pub struct Synchronizer<S: AppSource> {
    repositories: RepositorySet,
    source: S,
    fetch_timeout: Option<Duration>,
}

impl<S: AppSource> Synchronizer<S> {
    /// Create a synchronizer over `repositories`
    pub fn new(source: S, repositories: RepositorySet) -> Self {
        Self {
            repositories,
            source,
            fetch_timeout: None,
        }
    }

    /// Bound every listing fetch; a fetch that runs over becomes that
    /// repository's error entry
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    pub fn repositories(&self) -> &RepositorySet {
        &self.repositories
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch all listings and build the Apps menu without touching a host
    ///
    /// Never fails: a repository that cannot be loaded contributes a
    /// single inert error entry.
    pub async fn build_menu(&self) -> Menu {
        tracing::info!(
            repositories = self.repositories.len(),
            "Fetching listings from all app repositories"
        );

        let per_repository = join_all(
            self.repositories
                .iter()
                .map(|base_url| self.load_repository(base_url)),
        )
        .await;

        let mut options = Vec::new();
        let mut failed = 0;
        for (base_url, result) in self.repositories.iter().zip(per_repository) {
            match result {
                Ok(listing) => {
                    tracing::debug!(repository = %base_url, apps = listing.len(), "Loaded listing");
                    for entry in listing {
                        // The label is reserved for the trailing add option
                        if entry.name == ADD_REPOSITORY_LABEL {
                            tracing::warn!(
                                repository = %base_url,
                                path = %entry.path,
                                "Skipping app that uses the reserved label"
                            );
                            continue;
                        }
                        options.push(MenuOption::launch(entry.name, base_url, entry.path));
                    }
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(repository = %base_url, error = %e, "Failed to load listing");
                    options.push(MenuOption::load_error(base_url));
                }
            }
        }

        options.push(MenuOption::add_repository());

        tracing::info!(
            options = options.len(),
            failed_repositories = failed,
            "Apps menu built"
        );

        Menu::new(APPS_MENU, options)
    }

    /// Run one synchronization pass
    ///
    /// Builds the menu, removes any Apps menu already on the host and
    /// installs the new one. Returns a copy of what was installed.
    pub async fn synchronize<H>(&self, host: &mut H) -> Menu
    where
        H: MenuHost + ?Sized,
    {
        let menu = self.build_menu().await;

        host.remove_menu(APPS_MENU);
        host.install_menu(menu.clone());

        menu
    }

    /// Append a repository and rebuild the menu
    ///
    /// Blank and duplicate URLs leave both the set and the host untouched.
    pub async fn add_repository<H>(&mut self, url: &str, host: &mut H) -> AddOutcome
    where
        H: MenuHost + ?Sized,
    {
        let Some(normalized) = normalize_url(url) else {
            tracing::debug!("Ignoring blank repository URL");
            return AddOutcome::Rejected;
        };

        if !self.repositories.insert(&normalized) {
            tracing::debug!(repository = %normalized, "Repository already present");
            return AddOutcome::Duplicate;
        }

        tracing::info!(repository = %normalized, "Added app repository");

        self.synchronize(host).await;
        AddOutcome::Added
    }

    /// Perform the action behind a menu option
    ///
    /// Launching fetches the payload fresh on every call. Error entries do
    /// nothing; they are not retried.
    pub async fn activate<L, P>(
        &self,
        option: &MenuOption,
        launcher: &mut L,
        prompt: &mut P,
    ) -> Result<()>
    where
        L: AppLauncher + ?Sized,
        P: RepositoryPrompt + ?Sized,
    {
        match &option.action {
            MenuAction::LaunchApp { base_url, path } => {
                tracing::info!(app = %option.label, repository = %base_url, "Launching app");
                let payload = self.source.fetch_payload(base_url, path).await?;
                launcher.create_app(payload)
            }
            MenuAction::AddRepository => {
                prompt.open();
                Ok(())
            }
            MenuAction::Inert => {
                tracing::debug!(label = %option.label, "Inert menu option");
                Ok(())
            }
        }
    }

    async fn load_repository(&self, base_url: &str) -> Result<Listing> {
        let fetch = self.source.fetch_listing(base_url);

        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, fetch).await.map_err(|_| {
                PockitError::Timeout {
                    url: RepositorySet::listing_url(base_url),
                    limit,
                }
            })?,
            None => fetch.await,
        }
    }
}
