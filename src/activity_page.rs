use super::*;

/// One page of the "my activity" listing.
#[derive(Debug, PartialEq)]
pub(crate) enum ActivityPage {
  /// The listing rendered its "nothing here" placeholder, meaning every
  /// earlier page was the whole list.
  Empty,
  Rows(Vec<RawRow>),
}

/// A listing row before its link has been interpreted.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RawRow {
  pub(crate) href: String,
  pub(crate) text: String,
}

impl Markup for ActivityPage {
  fn parse(document: &Html) -> Result<Self, Error> {
    let empty = markup::selector("div.list-empty.line")?;

    if document.select(&empty).next().is_some() {
      return Ok(Self::Empty);
    }

    let rows = markup::selector("div.board-list div.list-row")?;
    let subject = markup::selector("a.list-subject")?;

    Ok(Self::Rows(
      document
        .select(&rows)
        .map(|row| {
          let link = row.select(&subject).next();

          RawRow {
            href: link
              .and_then(|link| link.value().attr("href"))
              .unwrap_or_default()
              .to_string(),
            text: link.map(markup::text).unwrap_or_default(),
          }
        })
        .collect(),
    ))
  }
}
