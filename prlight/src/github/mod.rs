// GitHub-Modul: Status-Quelle für offene, fehlschlagende Pull Requests
//
// - protocol: serde-Typen der Search API
// - search:   ureq-Client als StatusSource

pub mod protocol;
pub mod search;

pub use protocol::{Item, SearchResult, User};
pub use search::{GithubSearch, SearchError, SearchQuery};
