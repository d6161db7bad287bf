use super::*;

/// A view over one kind of page. Each implementor owns the selectors for its
/// page so a layout change upstream breaks exactly one parser.
pub(crate) trait Markup: Sized {
  fn from_html(html: &str) -> Result<Self, Error> {
    Self::parse(&Html::parse_document(html))
  }

  fn parse(document: &Html) -> Result<Self, Error>;
}

pub(crate) fn selector(css: &'static str) -> Result<Selector, Error> {
  Selector::parse(css).map_err(|error| Error::Selector {
    message: error.to_string(),
    selector: css,
  })
}

pub(crate) fn text(element: ElementRef) -> String {
  element.text().collect::<String>().trim().to_string()
}

/// The anti-forgery token embedded in the login form and in board pages.
#[derive(Debug, PartialEq)]
pub(crate) struct CsrfForm {
  pub(crate) token: Option<String>,
}

impl Markup for CsrfForm {
  fn parse(document: &Html) -> Result<Self, Error> {
    let input = selector("input[name=_csrf]")?;

    Ok(Self {
      token: document
        .select(&input)
        .next()
        .and_then(|element| element.value().attr("value"))
        .map(str::to_string),
    })
  }
}

/// The page returned after posting credentials. The site never says
/// "welcome"; a rejected login shows the anonymous account sidebar again.
#[derive(Debug, PartialEq)]
pub(crate) struct LoginOutcome {
  pub(crate) logged_out: bool,
}

impl Markup for LoginOutcome {
  fn parse(document: &Html) -> Result<Self, Error> {
    let marker = selector("div.side-account.after")?;

    Ok(Self {
      logged_out: document.select(&marker).next().is_some(),
    })
  }
}

/// The account information page. The user id sits in the last cell of the
/// first row of the info form's table.
#[derive(Debug, PartialEq)]
pub(crate) struct Profile {
  pub(crate) user_id: Option<String>,
}

impl Markup for Profile {
  fn parse(document: &Html) -> Result<Self, Error> {
    let cell = selector("#myInfoForm table tr:first-child td:last-child")?;

    Ok(Self {
      user_id: document
        .select(&cell)
        .next()
        .map(text)
        .filter(|user_id| !user_id.is_empty()),
    })
  }
}
