use super::*;

/// Streams the rows of the account's activity listing, one page at a time.
///
/// Paging stops at the listing's empty-page placeholder, at the first page
/// that cannot be fetched or parsed, or at the configured page cap. Rows whose
/// link cannot be interpreted are skipped without ending the page.
pub(crate) fn activity_rows(
  session: &Session,
  kind: ActivityKind,
) -> impl Stream<Item = ActivityRow> + '_ {
  let pagination = Pagination::new(session.config().max_pages);

  stream::unfold(pagination, move |mut pagination| async move {
    let Some(page) = pagination.current() else {
      warn!(
        pages = session.config().max_pages,
        "stopped {kind} listing at the page cap"
      );
      return None;
    };

    if page > 0 {
      sleep(kind.delay(session.config())).await;
    }

    match fetch_page(session, kind, page).await {
      Ok(ActivityPage::Empty) => {
        info!(page = page + 1, "reached the end of the {kind} listing");
        None
      }
      Ok(ActivityPage::Rows(rows)) => {
        info!("{} {kind}(s) found in page {}", rows.len(), page + 1);
        pagination.advance();
        Some((rows, pagination))
      }
      Err(error) => {
        warn!(%error, page = page + 1, "stopped {kind} listing");
        None
      }
    }
  })
  .flat_map(stream::iter)
  .filter_map(move |row| {
    future::ready(match ActivityRow::try_from(&row) {
      Ok(row) => Some(row),
      Err(error) => {
        warn!(%error, "skipping {kind} row");
        None
      }
    })
  })
}

async fn fetch_page(
  session: &Session,
  kind: ActivityKind,
  page: usize,
) -> Result<ActivityPage, Error> {
  let client = session.client();

  let body = client.get_text(&client.activity_url(kind, page)).await?;

  ActivityPage::from_html(&body)
}

pub(crate) async fn list_articles(
  session: &Session,
) -> Result<Vec<ArticleRecord>, Error> {
  if !session.is_authenticated() {
    return Err(Error::NotAuthenticated);
  }

  Ok(
    activity_rows(session, ActivityKind::Articles)
      .map(ArticleRecord::from)
      .inspect(|article| {
        info!(
          article_id = article.id,
          board_id = %article.board_id,
          "found article: {}",
          truncate(&article.title, 60)
        );
      })
      .collect::<Vec<_>>()
      .await,
  )
}

pub(crate) async fn list_comments(
  session: &Session,
) -> Result<Vec<CommentRecord>, Error> {
  if !session.is_authenticated() {
    return Err(Error::NotAuthenticated);
  }

  Ok(
    activity_rows(session, ActivityKind::Comments)
      .map(CommentRecord::from)
      .inspect(|comment| {
        debug!(
          article_id = comment.article_id,
          board_id = %comment.board_id,
          "found comment: {}",
          truncate(&comment.summary, 60)
        );
      })
      .collect::<Vec<_>>()
      .await,
  )
}
