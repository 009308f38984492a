// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every range constructor.

/// Errors raised while building a range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A bound (or a whole display string) is not valid ISO-8601 for the
    /// requested flavor.
    #[error("invalid {expected}: `{input}`")]
    Parse {
        input: String,
        expected: &'static str,
    },

    /// Start is after end. Only the strict constructors report this.
    #[error("invalid range: start ({start}) is after end ({end})")]
    InvalidRange { start: String, end: String },
}

impl Error {
    pub(crate) fn parse(input: &str, expected: &'static str) -> Self {
        Error::Parse {
            input: input.to_owned(),
            expected,
        }
    }
}

/// Shorthand `Result` used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = Error::parse("2017-13-01", "date");
        assert_eq!(err.to_string(), "invalid date: `2017-13-01`");
    }

    #[test]
    fn test_invalid_range_message() {
        let err = Error::InvalidRange {
            start: "2017-02-01".into(),
            end: "2017-01-01".into(),
        };
        assert!(err.to_string().contains("start (2017-02-01) is after end (2017-01-01)"));
    }
}
