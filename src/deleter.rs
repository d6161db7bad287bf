use super::*;

/// Deletes a resolved comment. Unresolved records are refused without any
/// request; every other failure is logged and reported as `false`.
pub(crate) async fn delete_comment(session: &Session, record: &CommentRecord) -> bool {
  if !record.is_resolved() {
    return false;
  }

  match try_delete_comment(session, record).await {
    Ok(deleted) => deleted,
    Err(error) => {
      warn!(%error, comment_id = record.comment_id, "could not delete comment");
      false
    }
  }
}

async fn try_delete_comment(
  session: &Session,
  record: &CommentRecord,
) -> Result<bool, Error> {
  let client = session.client();

  let token = authenticator::fetch_csrf_token(
    client,
    Some(client.article_url(&record.board_id, record.article_id).as_str()),
  )
  .await?;

  if token.is_none() {
    warn!(
      article_id = record.article_id,
      board_id = %record.board_id,
      "article page did not contain a CSRF token"
    );
  }

  let body = client
    .post_ajax(
      &client.comment_delete_url(
        &record.board_id,
        record.article_id,
        record.comment_id,
      ),
      token.as_deref().unwrap_or_default(),
    )
    .await?;

  if body != "true" {
    debug!(
      comment_id = record.comment_id,
      body = %truncate(&body, 80),
      "delete was refused"
    );
  }

  Ok(body == "true")
}
