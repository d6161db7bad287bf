use super::*;

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Report {
  pub(crate) articles: usize,
  pub(crate) comments_deleted: usize,
  pub(crate) comments_listed: usize,
  pub(crate) comments_resolved: usize,
}

impl Display for Report {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "found {} article(s) and {} comment(s); resolved {} and deleted {} comment(s)",
      self.articles, self.comments_listed, self.comments_resolved, self.comments_deleted,
    )
  }
}
