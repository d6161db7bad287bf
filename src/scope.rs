use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Scope {
  All,
  Articles,
  #[default]
  Comments,
}

impl Scope {
  pub(crate) fn includes_articles(self) -> bool {
    matches!(self, Self::All | Self::Articles)
  }

  pub(crate) fn includes_comments(self) -> bool {
    matches!(self, Self::All | Self::Comments)
  }

  pub(crate) fn parse(value: &str) -> Option<Self> {
    match value.trim().to_ascii_lowercase().as_str() {
      "all" => Some(Self::All),
      "articles" => Some(Self::Articles),
      "comments" => Some(Self::Comments),
      _ => None,
    }
  }
}

impl Display for Scope {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::All => "all",
      Self::Articles => "articles",
      Self::Comments => "comments",
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_covers_both_listings() {
    assert!(Scope::All.includes_articles());
    assert!(Scope::All.includes_comments());
    assert!(!Scope::Comments.includes_articles());
    assert!(!Scope::Articles.includes_comments());
  }

  #[test]
  fn parse_round_trips_display() {
    for scope in [Scope::All, Scope::Articles, Scope::Comments] {
      assert_eq!(Scope::parse(&scope.to_string()), Some(scope));
    }
  }
}
