use super::*;

#[derive(Debug, PartialEq)]
enum KeyOutcome {
  Cancel,
  Continue,
  Erased,
  Submit,
  Typed,
}

fn apply_key(password: &mut String, key: KeyEvent) -> KeyOutcome {
  if key.kind != KeyEventKind::Press {
    return KeyOutcome::Continue;
  }

  match key.code {
    KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
      KeyOutcome::Cancel
    }
    KeyCode::Enter => KeyOutcome::Submit,
    KeyCode::Backspace => {
      if password.pop().is_some() {
        KeyOutcome::Erased
      } else {
        KeyOutcome::Continue
      }
    }
    KeyCode::Char(ch) => {
      password.push(ch);
      KeyOutcome::Typed
    }
    _ => KeyOutcome::Continue,
  }
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
  let mut line = String::new();

  if input.read_line(&mut line)? == 0 {
    return Err(io::Error::new(
      io::ErrorKind::UnexpectedEof,
      "input closed before a value was entered",
    ));
  }

  Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts on stderr for a username and a masked password. Falls back to a
/// plain line for the password when stdin is not a terminal.
pub(crate) fn read_credentials() -> Result<Credentials, Error> {
  let mut stderr = io::stderr();
  let mut stdin = io::stdin().lock();

  write!(stderr, "Username: ")?;
  stderr.flush()?;

  let username = read_line(&mut stdin)?.trim().to_string();

  write!(stderr, "Password: ")?;
  stderr.flush()?;

  let password = if io::stdin().is_terminal() {
    read_masked(&mut stderr)?
  } else {
    read_line(&mut stdin)?
  };

  Ok(Credentials::new(username, password))
}

fn read_masked(output: &mut impl Write) -> io::Result<String> {
  enable_raw_mode()?;

  let result = read_masked_keys(output);

  disable_raw_mode()?;

  writeln!(output)?;

  result
}

fn read_masked_keys(output: &mut impl Write) -> io::Result<String> {
  let mut password = String::new();

  loop {
    let CrosstermEvent::Key(key) = crossterm_event::read()? else {
      continue;
    };

    match apply_key(&mut password, key) {
      KeyOutcome::Cancel => {
        return Err(io::Error::new(
          io::ErrorKind::Interrupted,
          "password entry cancelled",
        ));
      }
      KeyOutcome::Continue => {}
      KeyOutcome::Erased => write!(output, "\u{8} \u{8}")?,
      KeyOutcome::Submit => return Ok(password),
      KeyOutcome::Typed => write!(output, "*")?,
    }

    output.flush()?;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn typed_characters_accumulate_until_enter() {
    let mut password = String::new();

    assert_eq!(apply_key(&mut password, press(KeyCode::Char('a'))), KeyOutcome::Typed);
    assert_eq!(apply_key(&mut password, press(KeyCode::Char('b'))), KeyOutcome::Typed);
    assert_eq!(apply_key(&mut password, press(KeyCode::Enter)), KeyOutcome::Submit);

    assert_eq!(password, "ab");
  }

  #[test]
  fn backspace_erases_only_when_there_is_input() {
    let mut password = "a".to_string();

    assert_eq!(apply_key(&mut password, press(KeyCode::Backspace)), KeyOutcome::Erased);
    assert_eq!(apply_key(&mut password, press(KeyCode::Backspace)), KeyOutcome::Continue);

    assert!(password.is_empty());
  }

  #[test]
  fn control_c_cancels() {
    let mut password = String::new();

    assert_eq!(
      apply_key(
        &mut password,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
      ),
      KeyOutcome::Cancel
    );

    assert!(password.is_empty());
  }

  #[test]
  fn key_releases_are_ignored() {
    let mut password = String::new();

    let release = KeyEvent::new_with_kind(
      KeyCode::Char('x'),
      KeyModifiers::NONE,
      KeyEventKind::Release,
    );

    assert_eq!(apply_key(&mut password, release), KeyOutcome::Continue);
    assert!(password.is_empty());
  }

  #[test]
  fn read_line_strips_the_line_ending() {
    let mut input = io::Cursor::new("alice\r\nrest");

    assert_eq!(read_line(&mut input).unwrap(), "alice");
  }

  #[test]
  fn read_line_reports_closed_input() {
    let mut input = io::Cursor::new("");

    assert_eq!(
      read_line(&mut input).unwrap_err().kind(),
      io::ErrorKind::UnexpectedEof
    );
  }
}
