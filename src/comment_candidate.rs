use super::*;

/// One entry of an article's JSON comment feed.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentCandidate {
  #[serde(rename = "commentSn")]
  pub(crate) comment_id: u64,
  #[serde(default)]
  pub(crate) member: Option<CommentAuthor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentAuthor {
  #[serde(
    default,
    deserialize_with = "deserialize_user_id",
    rename = "userId"
  )]
  pub(crate) user_id: Option<String>,
}

impl CommentCandidate {
  pub(crate) fn author_id(&self) -> Option<&str> {
    self.member.as_ref()?.user_id.as_deref()
  }

  pub(crate) fn is_by(&self, user_id: &str) -> bool {
    self.author_id() == Some(user_id)
  }
}
