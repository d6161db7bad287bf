use super::*;

#[derive(Debug, Serialize)]
struct FeedQuery {
  order: &'static str,
  po: usize,
  ps: usize,
}

impl FeedQuery {
  const PAGE_SIZE: usize = 9999;

  fn page(offset: usize) -> Self {
    Self {
      order: "date",
      po: offset,
      ps: Self::PAGE_SIZE,
    }
  }
}

async fn fetch_candidates(
  client: &Client,
  url: &str,
  offset: usize,
) -> Result<Vec<CommentCandidate>, Error> {
  let param = serde_json::to_string(&FeedQuery::page(offset)).map_err(|source| {
    Error::Decode {
      source,
      url: url.to_string(),
    }
  })?;

  let body = client.get_text_with_query(url, &[("param", param)]).await?;

  serde_json::from_str(&body).map_err(|source| Error::Decode {
    source,
    url: url.to_string(),
  })
}

/// Finds the id of `record` in its article's comment feed by looking for an
/// entry written by the session's user. `resolved` holds the records resolved
/// earlier in the run, consulted according to the configured duplicate policy.
///
/// A page that fails to load is retried up to `max_retries` consecutive times
/// before giving up with `RetriesExhausted`.
pub(crate) async fn resolve(
  session: &Session,
  record: &mut CommentRecord,
  resolved: &[CommentRecord],
) -> Result<bool, Error> {
  if record.is_resolved() {
    return Ok(true);
  }

  let user_id = session.require_user_id()?;
  let config = session.config();
  let client = session.client();

  let url = client.comment_feed_url(&record.board_id, record.article_id);

  let mut pagination = Pagination::new(config.max_pages);
  let mut failures = 0;

  while let Some(offset) = pagination.current() {
    let candidates = match fetch_candidates(client, &url, offset).await {
      Ok(candidates) => {
        failures = 0;
        candidates
      }
      Err(error) => {
        failures += 1;

        warn!(%error, offset, attempt = failures, "could not load comment feed");

        if failures > config.max_retries {
          return Err(Error::RetriesExhausted {
            attempts: failures,
            source: Box::new(error),
            url,
          });
        }

        sleep(config.comment_delay).await;
        continue;
      }
    };

    if candidates.is_empty() {
      break;
    }

    if let Some(comment_id) =
      select_candidate(&candidates, user_id, resolved, config.duplicate_policy)
    {
      record.comment_id = comment_id;
      return Ok(true);
    }

    pagination.advance();
  }

  if pagination.is_capped() {
    warn!(
      article_id = record.article_id,
      board_id = %record.board_id,
      "stopped scanning comment feed at the page cap"
    );
  }

  Ok(record.is_resolved())
}

/// Resolves each record in turn and keeps the ones that resolved. Records
/// that fail are logged and dropped.
pub(crate) async fn resolve_all(
  session: &Session,
  records: Vec<CommentRecord>,
) -> Vec<CommentRecord> {
  let mut resolved = Vec::with_capacity(records.len());

  for mut record in records {
    match resolve(session, &mut record, &resolved).await {
      Ok(true) => {
        info!(
          article_id = record.article_id,
          comment_id = record.comment_id,
          "found comment: {}",
          truncate(&record.summary, 60)
        );
        resolved.push(record);
      }
      Ok(false) => {
        warn!(
          article_id = record.article_id,
          board_id = %record.board_id,
          "no matching comment in feed: {}",
          truncate(&record.summary, 60)
        );
      }
      Err(error) => {
        warn!(
          %error,
          article_id = record.article_id,
          board_id = %record.board_id,
          "could not resolve comment"
        );
      }
    }
  }

  resolved
}

fn select_candidate(
  candidates: &[CommentCandidate],
  user_id: &str,
  resolved: &[CommentRecord],
  policy: DuplicatePolicy,
) -> Option<u64> {
  candidates
    .iter()
    .filter(|candidate| candidate.is_by(user_id))
    .find(|candidate| {
      let duplicate = policy.rejects(candidate.comment_id, resolved);

      if duplicate {
        debug!(
          comment_id = candidate.comment_id,
          "skipping comment already claimed by another record"
        );
      }

      !duplicate
    })
    .map(|candidate| candidate.comment_id)
}
