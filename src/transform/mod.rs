//! Transform Module
//!
//! Converts a collection of records into the tag-grouped host view used for
//! configuration-management export.
//!
//! ## Shapes
//! ```text
//! grouped hosts:      { tag: { fqdn: { "ansible_host": ip } } }
//! ansible inventory:  { tag: { "hosts": { fqdn: { "ansible_host": ip } } } }
//! ```
//!
//! Groups and hosts are kept in sorted maps so the exported document is
//! stable. When the same fqdn appears twice under one tag, the later record
//! in iteration order wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};
use crate::model::Server;

/// Per-host variables in the exported inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVars {
    pub ansible_host: String,
}

/// fqdn -> host variables
pub type Hosts = BTreeMap<String, HostVars>;

/// tag -> hosts carrying that tag
pub type GroupedHosts = BTreeMap<String, Hosts>;

/// A single Ansible inventory group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroup {
    pub hosts: Hosts,
}

/// tag -> group, the top-level Ansible YAML inventory document
pub type AnsibleInventory = BTreeMap<String, HostGroup>;

/// Group hosts by every tag they carry
pub fn group_hosts(servers: &[Server]) -> GroupedHosts {
    let mut groups = GroupedHosts::new();

    for server in servers {
        for tag in &server.tags {
            groups.entry(tag.clone()).or_default().insert(
                server.fqdn.clone(),
                HostVars {
                    ansible_host: server.ip.clone(),
                },
            );
        }
    }

    groups
}

/// Wrap each tag group as `{ "hosts": ... }`
pub fn to_ansible_inventory(servers: &[Server]) -> AnsibleInventory {
    group_hosts(servers)
        .into_iter()
        .map(|(tag, hosts)| (tag, HostGroup { hosts }))
        .collect()
}

/// Render the Ansible inventory document as YAML
pub fn to_ansible_yaml(servers: &[Server]) -> Result<String> {
    serde_yaml::to_string(&to_ansible_inventory(servers))
        .map_err(|e| InventoryError::Encoding(e.to_string()))
}
