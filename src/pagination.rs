/// A page cursor with a hard upper bound, so no backend can keep a loop
/// paging forever.
#[derive(Clone, Debug)]
pub(crate) struct Pagination {
  cap: usize,
  page: usize,
}

impl Pagination {
  pub(crate) fn advance(&mut self) {
    self.page += 1;
  }

  pub(crate) fn current(&self) -> Option<usize> {
    (self.page < self.cap).then_some(self.page)
  }

  pub(crate) fn is_capped(&self) -> bool {
    self.page >= self.cap
  }

  pub(crate) fn new(cap: usize) -> Self {
    Self { cap, page: 0 }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pages_count_up_from_zero_until_the_cap() {
    let mut pagination = Pagination::new(3);
    let mut pages = Vec::new();

    while let Some(page) = pagination.current() {
      pages.push(page);
      pagination.advance();
    }

    assert_eq!(pages, vec![0, 1, 2]);
    assert!(pagination.is_capped());
  }

  #[test]
  fn current_repeats_until_advanced() {
    let pagination = Pagination::new(2);

    assert_eq!(pagination.current(), Some(0));
    assert_eq!(pagination.current(), Some(0));
    assert!(!pagination.is_capped());
  }
}
