//! Name-based resolution of declared remotes to local applications.
//!
//! A remote is declared by name only (`remotes: { cart: "cart@http://..." }`),
//! and that name rarely matches the target's `name` field exactly. The
//! resolver tries an ordered list of [`RemoteMatcher`]s; each matcher scans
//! every candidate before the next, looser matcher gets a turn.
//!
//! Containment matching is ambiguous when several local apps share name
//! fragments (`cart` vs `cart-admin`). The first candidate in snapshot order
//! wins. Use [`ResolutionPolicy::Exact`] or [`ResolutionPolicy::CaseInsensitive`]
//! where that is not acceptable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::node_id::NodeId;

/// Decides whether a declared remote name refers to a candidate app name.
pub trait RemoteMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn matches(&self, wanted: &str, candidate: &str) -> bool;

    /// Fragment matchers are not trusted to decide that a remote names its
    /// own application.
    fn is_fragment(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl RemoteMatcher for ExactMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn matches(&self, wanted: &str, candidate: &str) -> bool {
        wanted == candidate
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveMatcher;

impl RemoteMatcher for CaseInsensitiveMatcher {
    fn name(&self) -> &'static str {
        "case-insensitive"
    }

    fn matches(&self, wanted: &str, candidate: &str) -> bool {
        wanted.to_lowercase() == candidate.to_lowercase()
    }
}

/// Either name contains the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsMatcher;

impl RemoteMatcher for ContainsMatcher {
    fn name(&self) -> &'static str {
        "contains"
    }

    fn matches(&self, wanted: &str, candidate: &str) -> bool {
        candidate.contains(wanted) || wanted.contains(candidate)
    }

    fn is_fragment(&self) -> bool {
        true
    }
}

/// How loosely remote names are matched against local applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// Exact name only.
    Exact,
    /// Exact, then case-insensitive.
    CaseInsensitive,
    /// Exact, then case-insensitive, then containment in either direction.
    #[default]
    Fuzzy,
}

impl ResolutionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionPolicy::Exact => "exact",
            ResolutionPolicy::CaseInsensitive => "case-insensitive",
            ResolutionPolicy::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(ResolutionPolicy::Exact),
            "case-insensitive" => Ok(ResolutionPolicy::CaseInsensitive),
            "fuzzy" => Ok(ResolutionPolicy::Fuzzy),
            other => Err(format!(
                "unknown resolution policy '{other}' (expected exact, case-insensitive or fuzzy)"
            )),
        }
    }
}

/// Ordered chain of matchers.
pub struct RemoteResolver {
    matchers: Vec<Box<dyn RemoteMatcher>>,
}

impl RemoteResolver {
    pub fn new(matchers: Vec<Box<dyn RemoteMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn for_policy(policy: ResolutionPolicy) -> Self {
        let mut matchers: Vec<Box<dyn RemoteMatcher>> = vec![Box::new(ExactMatcher)];
        if matches!(
            policy,
            ResolutionPolicy::CaseInsensitive | ResolutionPolicy::Fuzzy
        ) {
            matchers.push(Box::new(CaseInsensitiveMatcher));
        }
        if policy == ResolutionPolicy::Fuzzy {
            matchers.push(Box::new(ContainsMatcher));
        }
        Self::new(matchers)
    }

    /// Names of the matchers in the order they are tried.
    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Find the local application `wanted` refers to.
    ///
    /// `consumer` is never returned: an application does not resolve to itself.
    pub fn resolve<'a>(
        &self,
        wanted: &str,
        consumer: &NodeId,
        candidates: &'a Classification,
    ) -> Option<(&'a NodeId, &'static str)> {
        self.matchers.iter().find_map(|matcher| {
            candidates
                .iter()
                .filter(|(id, _)| *id != consumer)
                .find(|(_, capability)| matcher.matches(wanted, &capability.config.name))
                .map(|(id, _)| (id, matcher.name()))
        })
    }

    /// Whether `wanted` is the consumer's own name under a whole-name matcher.
    pub fn names_consumer(
        &self,
        wanted: &str,
        consumer: &NodeId,
        candidates: &Classification,
    ) -> bool {
        candidates.get(consumer).is_some_and(|capability| {
            self.matchers
                .iter()
                .filter(|matcher| !matcher.is_fragment())
                .any(|matcher| matcher.matches(wanted, &capability.config.name))
        })
    }
}

impl Default for RemoteResolver {
    fn default() -> Self {
        Self::for_policy(ResolutionPolicy::default())
    }
}

impl fmt::Debug for RemoteResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteResolver")
            .field("matchers", &self.matcher_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationConfig, ConfigSnapshot, ConfigType};
    use crate::classify::classify;

    fn candidates(names: &[&str]) -> Classification {
        let mut snapshot = ConfigSnapshot::new();
        snapshot.insert(
            "/repo".to_string(),
            names
                .iter()
                .map(|name| ApplicationConfig::new(*name, ConfigType::Webpack))
                .collect(),
        );
        classify(&snapshot)
    }

    fn id(name: &str) -> NodeId {
        NodeId::app("/repo", name, ConfigType::Webpack)
    }

    #[test]
    fn exact_match_beats_earlier_fuzzy_candidate() {
        let apps = candidates(&["cart-admin", "cart"]);
        let resolver = RemoteResolver::default();
        let consumer = NodeId::from_raw("shell");

        let (resolved, via) = resolver.resolve("cart", &consumer, &apps).unwrap();
        assert_eq!(resolved, &id("cart"));
        assert_eq!(via, "exact");
    }

    #[test]
    fn falls_back_to_case_insensitive_then_contains() {
        let apps = candidates(&["Checkout", "product-catalog"]);
        let resolver = RemoteResolver::default();
        let consumer = NodeId::from_raw("shell");

        let (resolved, via) = resolver.resolve("checkout", &consumer, &apps).unwrap();
        assert_eq!(resolved, &id("Checkout"));
        assert_eq!(via, "case-insensitive");

        let (resolved, via) = resolver.resolve("catalog", &consumer, &apps).unwrap();
        assert_eq!(resolved, &id("product-catalog"));
        assert_eq!(via, "contains");

        // containment works in the other direction too
        let (resolved, _) = resolver
            .resolve("product-catalog-remote", &consumer, &apps)
            .unwrap();
        assert_eq!(resolved, &id("product-catalog"));
    }

    #[test]
    fn stricter_policies_stop_early() {
        let apps = candidates(&["Checkout", "product-catalog"]);
        let consumer = NodeId::from_raw("shell");

        let exact = RemoteResolver::for_policy(ResolutionPolicy::Exact);
        assert!(exact.resolve("checkout", &consumer, &apps).is_none());
        assert_eq!(exact.matcher_names(), vec!["exact"]);

        let insensitive = RemoteResolver::for_policy(ResolutionPolicy::CaseInsensitive);
        assert!(insensitive.resolve("checkout", &consumer, &apps).is_some());
        assert!(insensitive.resolve("catalog", &consumer, &apps).is_none());
    }

    #[test]
    fn never_resolves_to_consumer() {
        let apps = candidates(&["shell"]);
        let resolver = RemoteResolver::default();
        assert!(resolver.resolve("shell", &id("shell"), &apps).is_none());
        assert!(resolver.resolve("shell-remote", &id("shell"), &apps).is_none());
    }

    #[test]
    fn own_name_is_recognised_by_whole_name_matchers_only() {
        let apps = candidates(&["shell"]);
        let fuzzy = RemoteResolver::default();
        assert!(fuzzy.names_consumer("shell", &id("shell"), &apps));
        assert!(fuzzy.names_consumer("SHELL", &id("shell"), &apps));
        assert!(!fuzzy.names_consumer("shell-remote", &id("shell"), &apps));

        let exact = RemoteResolver::for_policy(ResolutionPolicy::Exact);
        assert!(!exact.names_consumer("SHELL", &id("shell"), &apps));
        assert!(!exact.names_consumer("shell", &id("cart"), &apps));
    }

    #[test]
    fn policy_parses_from_str() {
        assert_eq!(
            "case-insensitive".parse::<ResolutionPolicy>(),
            Ok(ResolutionPolicy::CaseInsensitive)
        );
        assert!("loose".parse::<ResolutionPolicy>().is_err());
    }
}
