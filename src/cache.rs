use crate::error::Result;
use crate::model::{CommitRecord, RepoId};
use std::collections::HashMap;
use std::fmt;

/// Identifies one fetched commit sequence. Entries fetched with different
/// credentials never alias: the token changes both the quota and which
/// private repositories are visible.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub owner: String,
    pub repo: String,
    pub credential: Option<String>,
}

impl CacheKey {
    pub fn new(repo: &RepoId, credential: Option<&str>) -> Self {
        Self {
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
            credential: credential.map(str::to_string),
        }
    }
}

impl fmt::Debug for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheKey")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("authenticated", &self.credential.is_some())
            .finish()
    }
}

/// Session-scoped memo of fetched commit lists, owned by the caller.
#[derive(Default)]
pub struct CommitCache {
    entries: HashMap<CacheKey, Vec<CommitRecord>>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&[CommitRecord]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: CacheKey, commits: Vec<CommitRecord>) {
        self.entries.insert(key, commits);
    }

    /// Drop one entry so the next lookup refetches. Returns whether anything was removed.
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached sequence for `key`, or run `fetch` and store its result.
    /// Failed fetches leave the cache untouched.
    pub fn get_or_fetch<F>(&mut self, key: CacheKey, fetch: F) -> Result<&[CommitRecord]>
    where
        F: FnOnce() -> Result<Vec<CommitRecord>>,
    {
        if !self.entries.contains_key(&key) {
            let commits = fetch()?;
            tracing::debug!(?key, commits = commits.len(), "caching commit list");
            self.entries.insert(key.clone(), commits);
        } else {
            tracing::debug!(?key, "commit list served from cache");
        }
        Ok(self.entries.get(&key).map(Vec::as_slice).unwrap_or(&[]))
    }
}

impl fmt::Debug for CommitCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitCache")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
