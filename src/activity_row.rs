use super::*;

/// A listing row whose link has been split into board and article ids.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ActivityRow {
  pub(crate) article_id: u64,
  pub(crate) board_id: String,
  pub(crate) text: String,
}

impl TryFrom<&RawRow> for ActivityRow {
  type Error = Error;

  fn try_from(row: &RawRow) -> Result<Self, Self::Error> {
    let path = row.href.split(['?', '#']).next().unwrap_or_default();

    let mut segments = path.trim_end_matches('/').rsplit('/');

    let article_id = segments
      .next()
      .and_then(|segment| segment.parse::<u64>().ok());

    let board_id = segments.next().filter(|segment| !segment.is_empty());

    match (board_id, article_id) {
      (Some(board_id), Some(article_id)) => Ok(Self {
        article_id,
        board_id: board_id.to_string(),
        text: row.text.trim().to_string(),
      }),
      _ => Err(Error::MalformedRow {
        href: row.href.clone(),
      }),
    }
  }
}
