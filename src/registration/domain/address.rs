//! `host:port` service address value object.

use super::AddressError;
use std::fmt;

/// Network location a service instance is reachable on.
///
/// Parsing follows the usual `host:port` rules: the port follows the last
/// colon, IPv6 literal hosts are written in brackets (`[::1]:8080`) and the
/// brackets are stripped from the stored host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceAddress {
    host: String,
    port: u16,
}

impl ServiceAddress {
    /// Parses a `host:port` string.
    ///
    /// The host may be empty (`":8080"`); the port must be a base-10 integer
    /// that fits a TCP port.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidPort`] when the port substring is not
    /// a valid port number, or one of the other [`AddressError`] variants
    /// when the string cannot be split into host and port.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let (host, port_text) = split_host_port(raw)?;
        let port = port_text
            .parse::<u16>()
            .map_err(|source| AddressError::InvalidPort {
                port: port_text.to_owned(),
                source,
            })?;

        Ok(Self {
            host: host.to_owned(),
            port,
        })
    }

    /// Returns the host without IPv6 brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port number.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

fn split_host_port(raw: &str) -> Result<(&str, &str), AddressError> {
    let Some((head, port)) = raw.rsplit_once(':') else {
        return Err(AddressError::MissingPort(raw.to_owned()));
    };

    let (host, after_host) = if let Some(bracketed) = raw.strip_prefix('[') {
        let Some((host, rest)) = bracketed.split_once(']') else {
            return Err(AddressError::MissingBracket(raw.to_owned()));
        };
        // The closing bracket must be followed directly by the port colon.
        match rest.strip_prefix(':') {
            Some(tail) if tail == port => {}
            Some(_) => return Err(AddressError::TooManyColons(raw.to_owned())),
            None => return Err(AddressError::MissingPort(raw.to_owned())),
        }
        if bracketed.contains('[') {
            return Err(unexpected_bracket(raw, '['));
        }
        (host, rest)
    } else {
        if head.contains(':') {
            return Err(AddressError::TooManyColons(raw.to_owned()));
        }
        if raw.contains('[') {
            return Err(unexpected_bracket(raw, '['));
        }
        (head, raw)
    };

    if after_host.contains(']') {
        return Err(unexpected_bracket(raw, ']'));
    }

    Ok((host, port))
}

fn unexpected_bracket(raw: &str, bracket: char) -> AddressError {
    AddressError::UnexpectedBracket {
        address: raw.to_owned(),
        bracket,
    }
}
