use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  config: Config,
}

impl Client {
  const USER_AGENT: &str = concat!("clien-sweep/", env!("CARGO_PKG_VERSION"));

  pub(crate) fn activity_url(&self, kind: ActivityKind, page: usize) -> String {
    format!(
      "{}/service/mypage/myArticle?type={}&po={page}&ps={}",
      self.config.base_url,
      kind.query_value(),
      ActivityKind::PAGE_SIZE,
    )
  }

  pub(crate) fn article_url(&self, board_id: &str, article_id: u64) -> String {
    format!("{}/service/board/{board_id}/{article_id}", self.config.base_url)
  }

  pub(crate) fn comment_delete_url(
    &self,
    board_id: &str,
    article_id: u64,
    comment_id: u64,
  ) -> String {
    format!(
      "{}/service/api/board/{board_id}/{article_id}/comment/delete/{comment_id}",
      self.config.base_url
    )
  }

  pub(crate) fn comment_feed_url(&self, board_id: &str, article_id: u64) -> String {
    format!(
      "{}/service/api/board/{board_id}/{article_id}/comment",
      self.config.base_url
    )
  }

  pub(crate) fn config(&self) -> &Config {
    &self.config
  }

  pub(crate) async fn get_text(&self, url: &str) -> Result<String, Error> {
    self.send(url, self.client.get(url)).await
  }

  pub(crate) async fn get_text_with_query<T: Serialize + ?Sized>(
    &self,
    url: &str,
    query: &T,
  ) -> Result<String, Error> {
    self.send(url, self.client.get(url).query(query)).await
  }

  pub(crate) fn login_page_url(&self) -> String {
    format!("{}/service/auth/login", self.config.base_url)
  }

  pub(crate) fn login_url(&self) -> String {
    format!("{}/service/login", self.config.base_url)
  }

  pub(crate) fn new(config: Config) -> Result<Self, Error> {
    let client = reqwest::Client::builder()
      .cookie_store(true)
      .timeout(config.request_timeout)
      .user_agent(Self::USER_AGENT)
      .build()
      .map_err(Error::Client)?;

    Ok(Self { client, config })
  }

  /// Posts with the headers the board's AJAX endpoints expect. The response
  /// status is not checked; callers judge success from the body.
  pub(crate) async fn post_ajax(
    &self,
    url: &str,
    csrf_token: &str,
  ) -> Result<String, Error> {
    let request = self
      .client
      .post(url)
      .header("X-Requested-With", "XMLHttpRequest")
      .header("X-CSRF-TOKEN", csrf_token);

    Self::body(url, request.send().await).await
  }

  /// Posts a form with a `Referer` header. The response status is not
  /// checked; callers judge success from the markup.
  pub(crate) async fn post_form<T: Serialize + ?Sized>(
    &self,
    url: &str,
    referer: &str,
    form: &T,
  ) -> Result<String, Error> {
    let request = self
      .client
      .post(url)
      .header(reqwest::header::REFERER, referer)
      .form(form);

    Self::body(url, request.send().await).await
  }

  pub(crate) fn profile_url(&self) -> String {
    format!("{}/service/mypage/myInfo", self.config.base_url)
  }

  async fn body(
    url: &str,
    response: reqwest::Result<reqwest::Response>,
  ) -> Result<String, Error> {
    let transport = |source| Error::Transport {
      source,
      url: url.to_string(),
    };

    response.map_err(transport)?.text().await.map_err(transport)
  }

  async fn send(
    &self,
    url: &str,
    request: reqwest::RequestBuilder,
  ) -> Result<String, Error> {
    Self::body(
      url,
      request
        .send()
        .await
        .and_then(reqwest::Response::error_for_status),
    )
    .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client() -> Client {
    Client::new(Config::for_server("https://example.test/")).unwrap()
  }

  #[test]
  fn activity_url_carries_kind_page_and_size() {
    assert_eq!(
      client().activity_url(ActivityKind::Comments, 3),
      "https://example.test/service/mypage/myArticle?type=comments&po=3&ps=100"
    );
  }

  #[test]
  fn comment_urls_are_scoped_to_board_and_article() {
    let client = client();

    assert_eq!(
      client.comment_feed_url("park", 42),
      "https://example.test/service/api/board/park/42/comment"
    );

    assert_eq!(
      client.comment_delete_url("park", 42, 7),
      "https://example.test/service/api/board/park/42/comment/delete/7"
    );

    assert_eq!(
      client.article_url("park", 42),
      "https://example.test/service/board/park/42"
    );
  }
}
