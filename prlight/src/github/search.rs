// GitHub-Suche als StatusSource
//
// ureq blockiert, deshalb läuft jede Abfrage in einem eigenen Worker-Thread.
// Das Ergebnis kommt über ein Signal zurück, der Executor bleibt frei.

use std::fmt;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use prlight_core::StatusSource;
use ureq::Agent;

use super::protocol::SearchResult;

/// User-Agent Header (GitHub lehnt Anfragen ohne ab)
pub const USER_AGENT: &str = concat!("prlight/", env!("CARGO_PKG_VERSION"));

/// Obergrenze für eine komplette Abfrage inklusive Body
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Fehler
// ============================================================================

#[derive(Debug)]
pub enum SearchError {
    /// Verbindung, TLS, Timeout
    Transport(ureq::Error),
    /// Antwort mit HTTP-Status ungleich 2xx
    Status(u16),
    /// Body ist kein gültiges Suchergebnis
    Decode(ureq::Error),
    /// Worker-Thread konnte nicht gestartet werden
    Worker(io::Error),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "request failed: {e}"),
            Self::Status(code) => write!(f, "bad response code {code}"),
            Self::Decode(e) => write!(f, "error decoding body: {e}"),
            Self::Worker(e) => write!(f, "cannot start search worker: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) | Self::Decode(e) => Some(e),
            Self::Worker(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<ureq::Error> for SearchError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => Self::Status(code),
            other => Self::Transport(other),
        }
    }
}

// ============================================================================
// Query
// ============================================================================

/// Alles, was eine Abfrage braucht
#[derive(Clone)]
pub struct SearchQuery {
    pub api_url: String,
    pub repo: String,
    pub author: String,
    pub token: String,
}

// Token nie in Logs
impl fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchQuery")
            .field("api_url", &self.api_url)
            .field("repo", &self.repo)
            .field("author", &self.author)
            .finish_non_exhaustive()
    }
}

impl SearchQuery {
    /// Suchausdruck für offene, fehlschlagende PRs des Autors
    pub fn search_terms(&self) -> String {
        format!(
            "type:pr repo:{} state:open status:failure author:{}",
            self.repo, self.author
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/search/issues", self.api_url.trim_end_matches('/'))
    }

    /// Blockierende Abfrage (läuft im Worker-Thread)
    fn run(&self, agent: &Agent) -> Result<bool, SearchError> {
        let mut response = agent
            .get(self.endpoint())
            .query("q", self.search_terms())
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .call()?;

        let result: SearchResult = response
            .body_mut()
            .read_json()
            .map_err(SearchError::Decode)?;

        for item in &result.items {
            log::debug!("Failing PR #{} by {}: {}", item.number, item.user.login, item.title);
        }
        Ok(result.is_failing())
    }
}

// ============================================================================
// StatusSource
// ============================================================================

pub struct GithubSearch {
    agent: Agent,
    query: Arc<SearchQuery>,
}

impl GithubSearch {
    pub fn new(query: SearchQuery) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();
        Self {
            agent,
            query: Arc::new(query),
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

impl StatusSource for GithubSearch {
    type Error = SearchError;

    async fn check_failing(&mut self) -> Result<bool, SearchError> {
        let done = Arc::new(Signal::<CriticalSectionRawMutex, Result<bool, SearchError>>::new());

        let worker_done = Arc::clone(&done);
        let query = Arc::clone(&self.query);
        let agent = self.agent.clone();
        thread::Builder::new()
            .name("github-search".into())
            .spawn(move || worker_done.signal(query.run(&agent)))
            .map_err(SearchError::Worker)?;

        done.wait().await
    }
}
