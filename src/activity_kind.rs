use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActivityKind {
  Articles,
  Comments,
}

impl ActivityKind {
  pub(crate) const PAGE_SIZE: usize = 100;

  pub(crate) fn delay(self, config: &Config) -> Duration {
    match self {
      Self::Articles => config.article_delay,
      Self::Comments => config.comment_delay,
    }
  }

  pub(crate) fn query_value(self) -> &'static str {
    match self {
      Self::Articles => "articles",
      Self::Comments => "comments",
    }
  }
}

impl Display for ActivityKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Articles => "article",
      Self::Comments => "comment",
    })
  }
}
