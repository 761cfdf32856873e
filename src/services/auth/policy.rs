//! Route classification: which paths are reachable without a credential.
//!
//! The public set is explicit and closed. Patterns are evaluated in their
//! declared order; anything that matches none of them is protected
//! (default deny). Built once at startup and shared read-only.

/// Outcome of classifying a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

#[derive(Debug, Clone)]
struct PathPattern {
    prefix: String,
    // `/**` suffix: the prefix itself and everything below it
    subtree: bool,
}

impl PathPattern {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (prefix, subtree) = match raw.strip_suffix("/**") {
            Some(prefix) => (prefix, true),
            None => (raw, false),
        };
        // Normalize away a trailing slash so "/api/public/" == "/api/public"
        // (a bare "/" is kept as-is).
        let prefix = if prefix.len() > 1 {
            prefix.trim_end_matches('/')
        } else {
            prefix
        }
        .to_string();

        Some(Self { prefix, subtree })
    }

    fn matches(&self, path: &str) -> bool {
        if path == self.prefix {
            return true;
        }
        self.subtree
            && path.starts_with(&self.prefix)
            && path.as_bytes().get(self.prefix.len()) == Some(&b'/')
    }
}

#[derive(Debug, Clone)]
pub struct RoutePolicy {
    public: Vec<PathPattern>,
}

impl RoutePolicy {
    pub fn new(patterns: &[String]) -> Self {
        let public = patterns
            .iter()
            .filter_map(|p| PathPattern::parse(p))
            .collect();
        Self { public }
    }

    pub fn classify(&self, path: &str) -> Access {
        if self.public.iter().any(|p| p.matches(path)) {
            return Access::Public;
        }
        Access::Protected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(patterns: &[&str]) -> RoutePolicy {
        let owned: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        RoutePolicy::new(&owned)
    }

    #[test]
    fn subtree_pattern_matches_prefix_and_descendants() {
        let p = policy(&["/api/public/**"]);
        assert_eq!(p.classify("/api/public"), Access::Public);
        assert_eq!(p.classify("/api/public/info"), Access::Public);
        assert_eq!(p.classify("/api/public/users/42"), Access::Public);
    }

    #[test]
    fn subtree_pattern_does_not_match_sibling_prefixes() {
        let p = policy(&["/api/public/**"]);
        assert_eq!(p.classify("/api/publicity"), Access::Protected);
        assert_eq!(p.classify("/api"), Access::Protected);
    }

    #[test]
    fn exact_pattern_matches_only_that_path() {
        let p = policy(&["/healthz"]);
        assert_eq!(p.classify("/healthz"), Access::Public);
        assert_eq!(p.classify("/healthz/deep"), Access::Protected);
    }

    #[test]
    fn unlisted_paths_are_protected_by_default() {
        let p = policy(&["/api/public/**"]);
        assert_eq!(p.classify("/api/private/data"), Access::Protected);
        assert_eq!(p.classify("/"), Access::Protected);
        assert_eq!(p.classify("/anything"), Access::Protected);
    }

    #[test]
    fn empty_policy_protects_everything() {
        let p = policy(&[]);
        assert_eq!(p.classify("/api/public/info"), Access::Protected);
    }

    #[test]
    fn blank_entries_are_ignored() {
        let p = policy(&["  ", "/api/public/**"]);
        assert_eq!(p.classify("/api/public/info"), Access::Public);
    }
}
