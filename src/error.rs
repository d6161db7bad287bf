use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to build HTTP client")]
  Client(#[source] reqwest::Error),
  #[error("invalid value `{value}` for {key}")]
  Config { key: &'static str, value: String },
  #[error("failed to decode comment feed from {url}")]
  Decode {
    #[source]
    source: serde_json::Error,
    url: String,
  },
  #[error("login rejected for user `{username}`")]
  LoginFailed { username: String },
  #[error("activity row link `{href}` does not end in /<board>/<article>")]
  MalformedRow { href: String },
  #[error("session has not been authenticated")]
  NotAuthenticated,
  #[error("profile page did not expose a user identifier")]
  ProfileUnavailable,
  #[error("could not read from the terminal")]
  Prompt(#[from] io::Error),
  #[error("gave up on {url} after {attempts} failed attempts")]
  RetriesExhausted {
    attempts: usize,
    #[source]
    source: Box<Error>,
    url: String,
  },
  #[error("invalid selector `{selector}`: {message}")]
  Selector {
    message: String,
    selector: &'static str,
  },
  #[error("failed to fetch CSRF token from {url}")]
  TokenFetchFailed {
    #[source]
    source: Box<Error>,
    url: String,
  },
  #[error("request to {url} failed")]
  Transport {
    #[source]
    source: reqwest::Error,
    url: String,
  },
}
