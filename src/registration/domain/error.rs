//! Error types for service address parsing.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors returned while parsing a `host:port` service address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The address has no `:` separating host and port.
    #[error("address {0}: missing port in address")]
    MissingPort(String),

    /// An unbracketed host contains a colon.
    #[error("address {0}: too many colons in address")]
    TooManyColons(String),

    /// A bracketed host is not closed with `]`.
    #[error("address {0}: missing ']' in address")]
    MissingBracket(String),

    /// A bracket appears outside the host brackets.
    #[error("address {address}: unexpected '{bracket}' in address")]
    UnexpectedBracket {
        /// The address as supplied.
        address: String,
        /// The offending bracket character.
        bracket: char,
    },

    /// The port is not a base-10 integer in the TCP port range.
    #[error("invalid port number '{port}': {source}")]
    InvalidPort {
        /// The port substring as supplied.
        port: String,
        /// Integer parsing failure.
        source: ParseIntError,
    },
}

impl AddressError {
    /// Returns `true` when the host/port split succeeded and only the port
    /// number failed to parse.
    #[must_use]
    pub const fn is_invalid_port(&self) -> bool {
        matches!(self, Self::InvalidPort { .. })
    }
}
