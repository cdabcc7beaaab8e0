//! Service identifier splitting.

use std::fmt;

/// Separator between the logical service name and the instance suffix.
pub const NAME_SEPARATOR: char = '.';

/// Logical service name plus an optional explicit instance identifier.
///
/// Identifiers of the form `name.instance` register under `name` with the
/// full string as the instance ID, so several instances can share one
/// discoverable name (`svc.worker1`, `svc.worker2`). Only the first separator
/// splits: `svc.eu.worker1` registers under `svc`. Identifiers without a
/// separator register under their own name and leave the instance ID to the
/// backend, which defaults it to the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceIdentity {
    name: String,
    id: Option<String>,
}

impl ServiceIdentity {
    /// Splits a raw identifier on its first [`NAME_SEPARATOR`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split_once(NAME_SEPARATOR).map_or_else(
            || Self {
                name: raw.to_owned(),
                id: None,
            },
            |(name, _)| Self {
                name: name.to_owned(),
                id: Some(raw.to_owned()),
            },
        )
    }

    /// Returns the logical service name used for discovery lookups.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the explicit instance identifier, if the raw identifier
    /// carried one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the identifier the backend stores the entry under.
    #[must_use]
    pub fn effective_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.effective_id())
    }
}
