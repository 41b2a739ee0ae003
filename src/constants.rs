//! Endpoint and default values shared by the library and the CLI.

/// Google Cloud Text-to-Speech voices endpoint.
pub const VOICES_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/voices";

/// Env file read for the API key when no path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Key looked up in the env file.
pub const API_KEY_NAME: &str = "VITE_GOOGLE_CLOUD_API_KEY";

/// Language code queried when none is given.
pub const DEFAULT_LANGUAGE_CODE: &str = "ja-JP";

/// Substring marking the voice family reported by default.
pub const DEFAULT_VOICE_FAMILY: &str = "Wavenet";

/// Printed for voices whose gender the service did not report.
pub const UNKNOWN_GENDER: &str = "UNKNOWN";
