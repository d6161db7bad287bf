use super::*;

/// Lists, resolves, and deletes the account's activity according to the
/// configured scope. Individual failures are logged and counted, never fatal.
pub(crate) async fn run(session: &Session) -> Result<Report, Error> {
  let config = session.config();

  let mut report = Report::default();

  info!(
    scope = %config.scope,
    duplicates = %config.duplicate_policy,
    dry_run = config.dry_run,
    "starting sweep"
  );

  if config.scope.includes_articles() {
    let articles = lister::list_articles(session).await?;

    info!("found {} article(s) on your account", articles.len());

    report.articles = articles.len();
  }

  if !config.scope.includes_comments() {
    return Ok(report);
  }

  let comments = lister::list_comments(session).await?;

  report.comments_listed = comments.len();

  info!("found {} comment(s) on your account", comments.len());

  let resolved = resolver::resolve_all(session, comments).await;

  report.comments_resolved = resolved.len();

  for comment in &resolved {
    if config.dry_run {
      info!(
        comment_id = comment.comment_id,
        article_id = comment.article_id,
        "dry run, not deleting: {}",
        truncate(&comment.summary, 60)
      );
      continue;
    }

    info!(comment_id = comment.comment_id, "deleting comment");

    let deleted = deleter::delete_comment(session, comment).await;

    info!(comment_id = comment.comment_id, deleted, "delete finished");

    if deleted {
      report.comments_deleted += 1;
    }
  }

  Ok(report)
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    serde_json::json,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path, query_param},
    },
  };

  async fn mount_account(server: &MockServer) {
    Mock::given(method("GET"))
      .and(path("/service/mypage/myArticle"))
      .and(query_param("type", "comments"))
      .and(query_param("po", "0"))
      .respond_with(ResponseTemplate::new(200).set_body_string(
        r#"<div class="board-list">
          <div class="list-row"><a class="list-subject" href="/service/board/park/42">first</a></div>
          <div class="list-row"><a class="list-subject" href="/service/board/park/43">second</a></div>
        </div>"#,
      ))
      .mount(server)
      .await;

    Mock::given(method("GET"))
      .and(path("/service/mypage/myArticle"))
      .and(query_param("type", "comments"))
      .and(query_param("po", "1"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_string(r#"<div class="list-empty line"></div>"#),
      )
      .mount(server)
      .await;

    Mock::given(method("GET"))
      .and(path("/service/api/board/park/42/comment"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
        {"commentSn": 501, "member": {"userId": "alice"}}
      ])))
      .mount(server)
      .await;

    Mock::given(method("GET"))
      .and(path("/service/api/board/park/43/comment"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .mount(server)
      .await;

    Mock::given(method("GET"))
      .and(path("/service/board/park/42"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_string(r#"<input name="_csrf" value="token">"#),
      )
      .mount(server)
      .await;
  }

  fn session(server: &MockServer, dry_run: bool) -> Session {
    let mut config = Config::for_server(&server.uri());
    config.dry_run = dry_run;

    let mut session = Session::new(config).unwrap();
    session.mark_authenticated();
    session.identify("alice".to_string()).unwrap();
    session
  }

  #[tokio::test]
  async fn resolved_comments_are_deleted() {
    let server = MockServer::start().await;

    mount_account(&server).await;

    Mock::given(method("POST"))
      .and(path("/service/api/board/park/42/comment/delete/501"))
      .respond_with(ResponseTemplate::new(200).set_body_string("true"))
      .expect(1)
      .mount(&server)
      .await;

    let report = run(&session(&server, false)).await.unwrap();

    assert_eq!(
      report,
      Report {
        articles: 0,
        comments_deleted: 1,
        comments_listed: 2,
        comments_resolved: 1,
      }
    );
  }

  #[tokio::test]
  async fn dry_run_deletes_nothing() {
    let server = MockServer::start().await;

    mount_account(&server).await;

    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200).set_body_string("true"))
      .expect(0)
      .mount(&server)
      .await;

    let report = run(&session(&server, true)).await.unwrap();

    assert_eq!(report.comments_resolved, 1);
    assert_eq!(report.comments_deleted, 0);
  }

  #[test]
  fn report_summarizes_counts() {
    let report = Report {
      articles: 2,
      comments_deleted: 3,
      comments_listed: 5,
      comments_resolved: 4,
    };

    assert_eq!(
      report.to_string(),
      "found 2 article(s) and 5 comment(s); resolved 4 and deleted 3 comment(s)"
    );
  }
}
