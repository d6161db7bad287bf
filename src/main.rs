use {
  activity_kind::ActivityKind,
  activity_page::{ActivityPage, RawRow},
  activity_row::ActivityRow,
  anyhow::Context,
  article_record::ArticleRecord,
  client::Client,
  comment_candidate::CommentCandidate,
  comment_record::CommentRecord,
  config::Config,
  credentials::Credentials,
  crossterm::{
    event as crossterm_event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::Stylize,
    terminal::{disable_raw_mode, enable_raw_mode},
  },
  duplicate_policy::DuplicatePolicy,
  error::Error,
  futures::{
    future,
    stream::{self, Stream, StreamExt},
  },
  markup::{CsrfForm, LoginOutcome, Markup, Profile},
  pagination::Pagination,
  report::Report,
  scope::Scope,
  scraper::{ElementRef, Html, Selector},
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  session::Session,
  std::{
    backtrace::BacktraceStatus,
    fmt::{self, Display, Formatter},
    io::{self, BufRead, IsTerminal, Write},
    process,
    time::Duration,
  },
  tokio::time::sleep,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{deserialize_user_id, truncate},
};

mod activity_kind;
mod activity_page;
mod activity_row;
mod article_record;
mod authenticator;
mod client;
mod comment_candidate;
mod comment_record;
mod config;
mod credentials;
mod deleter;
mod duplicate_policy;
mod error;
mod lister;
mod markup;
mod pagination;
mod prompt;
mod report;
mod resolver;
mod scope;
mod session;
mod sweep;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  if let Err(error) = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .try_init()
  {
    eprintln!("warning: could not initialize logging: {error}");
  }
}

async fn run() -> Result {
  let config = Config::from_env().context("invalid configuration")?;

  let credentials =
    prompt::read_credentials().context("could not read credentials")?;

  let mut session = Session::new(config)?;

  authenticator::authenticate(&mut session, &credentials)
    .await
    .context("failed to log into clien")?;

  info!(
    user_id = session.user_id().unwrap_or_default(),
    "successfully logged into clien"
  );

  let report = sweep::run(&session).await?;

  info!("{report}");

  Ok(())
}

#[tokio::main]
async fn main() {
  initialize_logging();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
