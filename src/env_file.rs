//! API key loading from a local `KEY=VALUE` env file.
//!
//! The file is never written back and no other keys are interpreted. Use
//! [load_api_key] with [constants::API_KEY_NAME](crate::constants::API_KEY_NAME)
//! to read the Google Cloud key the voices request needs.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Read the value for `key` from the env file at `path`.
///
/// The first line beginning with `<key>=` wins; the value is the text after
/// the `=` with surrounding whitespace trimmed. Returns
/// [Error::EnvFileNotFound] when the file is absent and [Error::ApiKeyMissing]
/// when no line matches or the value is empty.
pub fn load_api_key(path: impl AsRef<Path>, key: &str) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::EnvFileNotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })?;

    let prefix = format!("{key}=");
    for line in BufReader::new(file).lines() {
        let line = line?;
        if let Some(value) = line.strip_prefix(&prefix) {
            let value = value.trim();
            if value.is_empty() {
                break;
            }
            return Ok(value.to_string());
        }
    }
    Err(Error::ApiKeyMissing(key.to_string()))
}
