//! Server record definitions

use serde::{Deserialize, Deserializer, Serialize};

/// A single server's stored attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Assigned once at creation, never regenerated
    pub id: String,

    /// Fully-qualified domain name
    pub fqdn: String,

    /// Textual IPv4/IPv6 address
    pub ip: String,

    /// Group memberships; duplicates permitted
    pub tags: Vec<String>,
}

/// A record as supplied by a caller, before an id is assigned
///
/// Missing and `null` JSON fields decode to their empty value, so "omitted"
/// and "explicitly empty" are indistinguishable. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub fqdn: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub ip: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// Decode `null` as the type's empty value
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ServerInput {
    pub fn new(fqdn: impl Into<String>, ip: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            fqdn: fqdn.into(),
            ip: ip.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Attach an id, producing a storable record
    pub fn into_server(self, id: String) -> Server {
        Server {
            id,
            fqdn: self.fqdn,
            ip: self.ip,
            tags: self.tags,
        }
    }
}

impl Server {
    /// Merge a partial patch into this record in place
    ///
    /// Returns true if any field changed. Rules:
    /// - `ip` / `fqdn`: overwritten when the patch value is non-empty and differs
    /// - `tags`: overwritten only when the patch is non-empty AND its length
    ///   differs from the current tag count. A same-length list with different
    ///   values is ignored (known quirk, kept deliberately).
    pub fn apply_patch(&mut self, patch: &ServerInput) -> bool {
        let mut changed = false;

        if !patch.ip.is_empty() && patch.ip != self.ip {
            self.ip = patch.ip.clone();
            changed = true;
        }

        if !patch.fqdn.is_empty() && patch.fqdn != self.fqdn {
            self.fqdn = patch.fqdn.clone();
            changed = true;
        }

        if !patch.tags.is_empty() && patch.tags.len() != self.tags.len() {
            self.tags = patch.tags.clone();
            changed = true;
        }

        changed
    }
}
