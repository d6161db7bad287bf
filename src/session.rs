use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SessionState {
  Anonymous,
  Authenticated,
  Identified { user_id: String },
}

/// An HTTP client with its cookie jar and the login progress of the account
/// it belongs to. State only moves forward: anonymous, authenticated, then
/// identified once the profile page has yielded a user id.
pub(crate) struct Session {
  client: Client,
  state: SessionState,
}

impl Session {
  pub(crate) fn client(&self) -> &Client {
    &self.client
  }

  pub(crate) fn config(&self) -> &Config {
    self.client.config()
  }

  pub(crate) fn identify(&mut self, user_id: String) -> Result<(), Error> {
    if self.state == SessionState::Anonymous {
      return Err(Error::NotAuthenticated);
    }

    self.state = SessionState::Identified { user_id };

    Ok(())
  }

  pub(crate) fn is_authenticated(&self) -> bool {
    !matches!(self.state, SessionState::Anonymous)
  }

  pub(crate) fn mark_authenticated(&mut self) {
    if self.state == SessionState::Anonymous {
      self.state = SessionState::Authenticated;
    }
  }

  pub(crate) fn new(config: Config) -> Result<Self, Error> {
    Ok(Self {
      client: Client::new(config)?,
      state: SessionState::Anonymous,
    })
  }

  pub(crate) fn require_user_id(&self) -> Result<&str, Error> {
    self.user_id().ok_or(Error::NotAuthenticated)
  }

  pub(crate) fn user_id(&self) -> Option<&str> {
    match &self.state {
      SessionState::Identified { user_id } => Some(user_id),
      SessionState::Anonymous | SessionState::Authenticated => None,
    }
  }

  #[cfg(test)]
  pub(crate) fn state(&self) -> &SessionState {
    &self.state
  }

  #[cfg(test)]
  pub(crate) fn identified(base_url: &str, user_id: &str) -> Self {
    let mut session = Self::new(Config::for_server(base_url)).unwrap();
    session.mark_authenticated();
    session.identify(user_id.to_string()).unwrap();
    session
  }
}
