use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ArticleRecord {
  pub(crate) board_id: String,
  pub(crate) id: u64,
  pub(crate) title: String,
}

impl From<ActivityRow> for ArticleRecord {
  fn from(row: ActivityRow) -> Self {
    Self {
      board_id: row.board_id,
      id: row.article_id,
      title: row.text,
    }
  }
}
