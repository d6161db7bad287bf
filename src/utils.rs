use super::*;

/// Reads a user id that the feed sends as a string, a number, or not at all.
/// Blank ids count as missing.
pub(crate) fn deserialize_user_id<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(user_id)) => {
      Ok(Some(user_id).filter(|user_id| !user_id.trim().is_empty()))
    }
    Some(Value::Number(user_id)) => Ok(Some(user_id.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"a user id string or number",
    )),
    Some(Value::Array(_) | Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Other("nested JSON value"),
      &"a user id string or number",
    )),
  }
}

/// Shortens listing text for log lines.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}
