use super::*;

/// A comment found on the activity listing. The listing only links to the
/// article, so `comment_id` stays 0 until the resolver finds it in the
/// article's comment feed.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CommentRecord {
  pub(crate) article_id: u64,
  pub(crate) board_id: String,
  pub(crate) comment_id: u64,
  pub(crate) summary: String,
}

impl CommentRecord {
  pub(crate) fn is_resolved(&self) -> bool {
    self.comment_id > 0
  }
}

impl From<ActivityRow> for CommentRecord {
  fn from(row: ActivityRow) -> Self {
    Self {
      article_id: row.article_id,
      board_id: row.board_id,
      comment_id: 0,
      summary: row.text,
    }
  }
}
