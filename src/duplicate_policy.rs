use super::*;

/// How the resolver treats a feed entry whose comment id was already claimed
/// by an earlier record in the same run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DuplicatePolicy {
  /// Take the first entry by the current user even if an earlier record
  /// already resolved to it.
  Allow,
  /// Pass over entries whose id an earlier record already resolved to.
  #[default]
  Skip,
}

impl DuplicatePolicy {
  pub(crate) fn parse(value: &str) -> Option<Self> {
    match value.trim().to_ascii_lowercase().as_str() {
      "allow" => Some(Self::Allow),
      "skip" => Some(Self::Skip),
      _ => None,
    }
  }

  pub(crate) fn rejects(self, comment_id: u64, resolved: &[CommentRecord]) -> bool {
    match self {
      Self::Allow => false,
      Self::Skip => resolved
        .iter()
        .any(|record| record.comment_id != 0 && record.comment_id == comment_id),
    }
  }
}

impl Display for DuplicatePolicy {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Allow => "allow",
      Self::Skip => "skip",
    })
  }
}
