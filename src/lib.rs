//! This library lists **Google Cloud Text-to-Speech** voices for a language
//! code and filters them down to one voice family by name.
//!
//! # Features
//! + `blocking`: enable the synchronous client used by the `list-voices`
//!   binary. Default.
//!
//! # How to use
//! 1. Put your Google Cloud API key in a local `.env` file and load it with
//!    [load_api_key](env_file::load_api_key):
//!    ```text
//!    VITE_GOOGLE_CLOUD_API_KEY=your-key
//!    ```
//!
//! 2. Fetch the voice catalog. Use [get_voices_list](voice::get_voices_list)
//!    or [get_voices_list_async](voice::get_voices_list_async), or a
//!    [VoicesClient](voice::VoicesClient) directly.
//!    [Voice](voice::Voice) implemented [serde::Serialize] and [serde::Deserialize].
//!    ```no_run
//!    use gcloud_tts_voices::{constants, env_file::load_api_key, voice::get_voices_list};
//!
//!    fn main() -> gcloud_tts_voices::error::Result<()> {
//!        let api_key = load_api_key(constants::DEFAULT_ENV_FILE, constants::API_KEY_NAME)?;
//!        let voices = get_voices_list(&api_key, "ja-JP")?;
//!        for voice in &voices {
//!            if voice.name.contains("Wavenet") {
//!                println!("{}", voice.name);
//!            }
//!        }
//!        Ok(())
//!    }
//!    ```
//!
//! 3. Or print the standard report with [write_report](report::write_report):
//!    total catalog count first, then `Name: <name>, Gender: <gender>` for
//!    every voice in the family.

pub mod constants;
pub mod env_file;
pub mod error;
pub mod report;
pub mod voice;
