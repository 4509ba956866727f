use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::application::ConfigType;

const EXTERNAL_PREFIX: &str = "external-";
const SHARED_PREFIX: &str = "shared-";
const MODULE_INFIX: &str = "-module-";

/// Maximum number of base-36 digits kept from the root hash.
const ROOT_HASH_LEN: usize = 8;

/// Identifier of a node in the federation graph.
///
/// Local applications get an id derived from their project root, name and
/// build tool, so the same app keeps the same id across runs while two
/// same-named apps under different roots stay distinct. Every other node
/// kind uses a synthetic id built from a fixed prefix or infix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Id of a local application: `<root hash>-<name>-<config type>`.
    pub fn app(root_path: &str, name: &str, config_type: ConfigType) -> Self {
        Self(format!("{}-{}-{}", root_hash(root_path), name, config_type))
    }

    /// Id of a remote that did not resolve to any local application.
    pub fn external(remote_name: &str) -> Self {
        Self(format!("{EXTERNAL_PREFIX}{remote_name}"))
    }

    /// Id of a module exposed by `owner`.
    pub fn exposed_module(owner: &NodeId, module_name: &str) -> Self {
        Self(format!("{}{MODULE_INFIX}{module_name}", owner.0))
    }

    /// Id of a library shared by several applications.
    pub fn shared(dependency_name: &str) -> Self {
        Self(format!("{SHARED_PREFIX}{dependency_name}"))
    }

    /// Wrap an id that was produced elsewhere (e.g. typed by a user).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_external(&self) -> bool {
        self.0.starts_with(EXTERNAL_PREFIX)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Short, stable hash of a project root path.
///
/// 32-bit `h * 31 + c` rolling hash over the UTF-16 code units of the path,
/// wrapping on overflow, then the magnitude in lowercase base 36, cut to
/// eight digits.
pub fn root_hash(root_path: &str) -> String {
    let mut hash: i32 = 0;
    for unit in root_path.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }

    let mut encoded = to_base36(i64::from(hash).unsigned_abs());
    encoded.truncate(ROOT_HASH_LEN);
    encoded
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}
