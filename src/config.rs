use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) article_delay: Duration,
  pub(crate) base_url: String,
  pub(crate) comment_delay: Duration,
  pub(crate) dry_run: bool,
  pub(crate) duplicate_policy: DuplicatePolicy,
  pub(crate) max_pages: usize,
  pub(crate) max_retries: usize,
  pub(crate) request_timeout: Duration,
  pub(crate) scope: Scope,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      article_delay: Duration::from_millis(100),
      base_url: Self::DEFAULT_BASE_URL.to_string(),
      comment_delay: Duration::from_millis(50),
      dry_run: false,
      duplicate_policy: DuplicatePolicy::default(),
      max_pages: 1000,
      max_retries: 5,
      request_timeout: Duration::from_secs(30),
      scope: Scope::default(),
    }
  }
}

impl Config {
  const DEFAULT_BASE_URL: &str = "https://m.clien.net";

  #[cfg(test)]
  pub(crate) fn for_server(base_url: &str) -> Self {
    Self {
      article_delay: Duration::ZERO,
      base_url: base_url.trim_end_matches('/').to_string(),
      comment_delay: Duration::ZERO,
      max_pages: 20,
      max_retries: 2,
      request_timeout: Duration::from_secs(5),
      ..Self::default()
    }
  }

  pub(crate) fn from_env() -> Result<Self, Error> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(value) = lookup("CLIEN_BASE_URL") {
      let url = value.trim().trim_end_matches('/');

      if url.is_empty() {
        return Err(Error::Config {
          key: "CLIEN_BASE_URL",
          value,
        });
      }

      config.base_url = url.to_string();
    }

    if let Some(millis) = Self::number(&lookup, "CLIEN_ARTICLE_DELAY_MS")? {
      config.article_delay = Duration::from_millis(millis);
    }

    if let Some(millis) = Self::number(&lookup, "CLIEN_COMMENT_DELAY_MS")? {
      config.comment_delay = Duration::from_millis(millis);
    }

    if let Some(pages) = Self::number(&lookup, "CLIEN_MAX_PAGES")? {
      if pages == 0 {
        return Err(Error::Config {
          key: "CLIEN_MAX_PAGES",
          value: pages.to_string(),
        });
      }

      config.max_pages = Self::usize(pages, "CLIEN_MAX_PAGES")?;
    }

    if let Some(retries) = Self::number(&lookup, "CLIEN_MAX_RETRIES")? {
      config.max_retries = Self::usize(retries, "CLIEN_MAX_RETRIES")?;
    }

    if let Some(secs) = Self::number(&lookup, "CLIEN_TIMEOUT_SECS")? {
      if secs == 0 {
        return Err(Error::Config {
          key: "CLIEN_TIMEOUT_SECS",
          value: secs.to_string(),
        });
      }

      config.request_timeout = Duration::from_secs(secs);
    }

    if let Some(value) = lookup("CLIEN_SCOPE") {
      config.scope = Scope::parse(&value).ok_or(Error::Config {
        key: "CLIEN_SCOPE",
        value,
      })?;
    }

    if let Some(value) = lookup("CLIEN_DUPLICATES") {
      config.duplicate_policy =
        DuplicatePolicy::parse(&value).ok_or(Error::Config {
          key: "CLIEN_DUPLICATES",
          value,
        })?;
    }

    if let Some(value) = lookup("CLIEN_DRY_RUN") {
      config.dry_run = match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => true,
        "" | "0" | "false" | "no" => false,
        _ => {
          return Err(Error::Config {
            key: "CLIEN_DRY_RUN",
            value,
          });
        }
      };
    }

    Ok(config)
  }

  fn number<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, Error>
  where
    F: Fn(&str) -> Option<String>,
  {
    lookup(key)
      .map(|value| {
        value
          .trim()
          .parse::<u64>()
          .map_err(|_| Error::Config { key, value })
      })
      .transpose()
  }

  fn usize(value: u64, key: &'static str) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| Error::Config {
      key,
      value: value.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::collections::HashMap};

  fn config_from(pairs: &[(&str, &str)]) -> Result<Config, Error> {
    let vars = pairs
      .iter()
      .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
      .collect::<HashMap<_, _>>();

    Config::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_match_the_live_site() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.base_url, "https://m.clien.net");
    assert_eq!(config.article_delay, Duration::from_millis(100));
    assert_eq!(config.comment_delay, Duration::from_millis(50));
    assert_eq!(config.scope, Scope::Comments);
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Skip);
    assert!(!config.dry_run);
  }

  #[test]
  fn overrides_are_applied() {
    let config = config_from(&[
      ("CLIEN_BASE_URL", "http://localhost:8080/"),
      ("CLIEN_ARTICLE_DELAY_MS", "5"),
      ("CLIEN_MAX_PAGES", "3"),
      ("CLIEN_SCOPE", "all"),
      ("CLIEN_DUPLICATES", "allow"),
      ("CLIEN_DRY_RUN", "1"),
    ])
    .unwrap();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.article_delay, Duration::from_millis(5));
    assert_eq!(config.max_pages, 3);
    assert_eq!(config.scope, Scope::All);
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Allow);
    assert!(config.dry_run);
  }

  #[test]
  fn invalid_values_name_the_offending_key() {
    match config_from(&[("CLIEN_MAX_RETRIES", "lots")]) {
      Err(Error::Config { key, value }) => {
        assert_eq!(key, "CLIEN_MAX_RETRIES");
        assert_eq!(value, "lots");
      }
      other => panic!("unexpected result: {other:?}"),
    }
  }

  #[test]
  fn zero_page_cap_is_rejected() {
    assert!(matches!(
      config_from(&[("CLIEN_MAX_PAGES", "0")]),
      Err(Error::Config {
        key: "CLIEN_MAX_PAGES",
        ..
      })
    ));
  }

  #[test]
  fn zero_timeout_is_rejected() {
    assert!(matches!(
      config_from(&[("CLIEN_TIMEOUT_SECS", "0")]),
      Err(Error::Config {
        key: "CLIEN_TIMEOUT_SECS",
        ..
      })
    ));

    assert_eq!(
      config_from(&[("CLIEN_TIMEOUT_SECS", "7")])
        .unwrap()
        .request_timeout,
      Duration::from_secs(7)
    );
  }

  #[test]
  fn blank_base_url_reports_the_raw_value() {
    for raw in ["/", "  ", " // "] {
      match config_from(&[("CLIEN_BASE_URL", raw)]) {
        Err(Error::Config { key, value }) => {
          assert_eq!(key, "CLIEN_BASE_URL");
          assert_eq!(value, raw);
        }
        other => panic!("unexpected result: {other:?}"),
      }
    }
  }

  #[test]
  fn unknown_scope_is_rejected() {
    assert!(config_from(&[("CLIEN_SCOPE", "everything")]).is_err());
  }
}
