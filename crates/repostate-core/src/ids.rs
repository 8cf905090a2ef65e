use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identity of a remote repository in `owner/name` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid repository full name: {0:?}")]
pub struct InvalidRepoId(pub String);

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self { owner: owner.into(), name: name.into() }
    }

    /// Parse `owner/name`, rejecting empty segments and extra slashes.
    pub fn parse(full_name: &str) -> Result<Self, InvalidRepoId> {
        let mut parts = full_name.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name.trim_end_matches(".git")))
            }
            _ => Err(InvalidRepoId(full_name.to_string())),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_name() {
        let id = RepoId::parse("octocat/hello-world").unwrap();
        assert_eq!(id.owner, "octocat");
        assert_eq!(id.name, "hello-world");
        assert_eq!(id.to_string(), "octocat/hello-world");
    }

    #[test]
    fn strips_git_suffix() {
        let id = RepoId::parse("octocat/hello.git").unwrap();
        assert_eq!(id.name, "hello");
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(RepoId::parse("").is_err());
        assert!(RepoId::parse("octocat").is_err());
        assert!(RepoId::parse("/hello").is_err());
        assert!(RepoId::parse("octocat/").is_err());
        assert!(RepoId::parse("a/b/c").is_err());
    }
}
