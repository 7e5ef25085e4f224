// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Every variant carries owned strings rather than source errors so the type
//! stays `Clone` and can travel inside Iced messages.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Transport-level failure: connection refused, timeout, non-2xx status.
    #[error("HTTP Error: {0}")]
    Http(String),

    /// The response body could not be decoded.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// The API answered but reported application-level errors.
    #[error("API Error: {}", .0.join("; "))]
    Api(Vec<String>),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Http(_) => "error-fetch-network",
            Error::Decode(_) => "error-fetch-decode",
            Error::Api(_) => "error-fetch-server",
        }
    }

    /// First human-readable detail, used for log lines and toast arguments.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Error::Api(errors) => errors.first().cloned().unwrap_or_default(),
            Error::Io(msg) | Error::Config(msg) | Error::Http(msg) | Error::Decode(msg) => {
                msg.clone()
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_error_joins_all_messages() {
        let err = Error::Api(vec!["server error".into(), "try later".into()]);
        assert_eq!(format!("{}", err), "API Error: server error; try later");
        assert_eq!(err.detail(), "server error");
    }

    #[test]
    fn malformed_json_becomes_decode_error() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn i18n_keys_are_distinct_per_fetch_failure() {
        assert_eq!(Error::Http(String::new()).i18n_key(), "error-fetch-network");
        assert_eq!(Error::Decode(String::new()).i18n_key(), "error-fetch-decode");
        assert_eq!(Error::Api(Vec::new()).i18n_key(), "error-fetch-server");
    }
}
