use super::*;

/// Logs in and identifies the account, turning every failure into an error.
pub(crate) async fn authenticate(
  session: &mut Session,
  credentials: &Credentials,
) -> Result<(), Error> {
  let token = fetch_csrf_token(session.client(), None).await?;

  if token.is_none() {
    warn!("login page did not contain a CSRF token, submitting without one");
  }

  if !login(session, token.as_deref().unwrap_or_default(), credentials).await? {
    return Err(Error::LoginFailed {
      username: credentials.username().to_string(),
    });
  }

  if session.user_id().is_none() {
    return Err(Error::ProfileUnavailable);
  }

  Ok(())
}

/// Fetches the anti-forgery token from `url`, or from the login page when no
/// url is given. A page without the token yields `Ok(None)`.
pub(crate) async fn fetch_csrf_token(
  client: &Client,
  url: Option<&str>,
) -> Result<Option<String>, Error> {
  let url = url.map_or_else(|| client.login_page_url(), str::to_string);

  let token_fetch_failed = |source| Error::TokenFetchFailed {
    source: Box::new(source),
    url: url.clone(),
  };

  let body = client.get_text(&url).await.map_err(token_fetch_failed)?;

  let form = CsrfForm::from_html(&body).map_err(token_fetch_failed)?;

  debug!(url = %url, found = form.token.is_some(), "fetched CSRF token");

  Ok(form.token)
}

/// Loads the profile page and records the user id on the session. Does
/// nothing on an anonymous session.
pub(crate) async fn load_profile(session: &mut Session) -> Result<bool, Error> {
  if !session.is_authenticated() {
    return Ok(false);
  }

  let body = session
    .client()
    .get_text(&session.client().profile_url())
    .await?;

  match Profile::from_html(&body)?.user_id {
    Some(user_id) => {
      info!(user_id = %user_id, "verified user id");
      session.identify(user_id)?;
      Ok(true)
    }
    None => {
      warn!("profile page did not contain a user id");
      Ok(false)
    }
  }
}

/// Posts the credentials. The login counts as successful unless the response
/// still shows the logged-out sidebar. On success the profile is loaded
/// straight away; a profile page that fails to load is an error, one that
/// loads without a user id is not.
pub(crate) async fn login(
  session: &mut Session,
  token: &str,
  credentials: &Credentials,
) -> Result<bool, Error> {
  let client = session.client();

  let body = client
    .post_form(
      &client.login_url(),
      &client.login_page_url(),
      &[
        ("_csrf", token),
        ("userId", credentials.username()),
        ("userPassword", credentials.password()),
      ],
    )
    .await?;

  if LoginOutcome::from_html(&body)?.logged_out {
    warn!(username = credentials.username(), "login was rejected");
    return Ok(false);
  }

  session.mark_authenticated();

  load_profile(session).await?;

  Ok(true)
}
