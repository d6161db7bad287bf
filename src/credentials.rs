use super::*;

pub(crate) struct Credentials {
  password: String,
  username: String,
}

impl Credentials {
  pub(crate) fn new(username: String, password: String) -> Self {
    Self { password, username }
  }

  pub(crate) fn password(&self) -> &str {
    &self.password
  }

  pub(crate) fn username(&self) -> &str {
    &self.username
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("password", &"<redacted>")
      .field("username", &self.username)
      .finish()
  }
}
