use crate::analysis::{analyze, build_export, build_report, WeekdayOrder};
use crate::cache::{CacheKey, CommitCache};
use crate::error::Result;
use crate::github::{fetch_commits_with_spinner, CommitSource};
use crate::model::{AnalysisReport, CommitRecord, ExportOutput, RepoId};
use crate::util::{normalize_token, parse_repo_identifier};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub repository: String,
    pub token: Option<String>,
    pub weekday_order: WeekdayOrder,
}

impl AnalysisRequest {
    pub fn new(repository: impl Into<String>, token: Option<String>) -> Self {
        Self {
            repository: repository.into(),
            token,
            weekday_order: WeekdayOrder::default(),
        }
    }

    pub fn with_weekday_order(mut self, order: WeekdayOrder) -> Self {
        self.weekday_order = order;
        self
    }

    fn token(&self) -> Option<&str> {
        normalize_token(self.token.as_deref())
    }
}

/// Owns a commit source and the cache of what it returned. Every call is a
/// plain request/response; nothing here knows about terminals.
pub struct Session<S: CommitSource> {
    source: S,
    cache: CommitCache,
    show_progress: bool,
}

impl<S: CommitSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: CommitCache::new(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn set_progress(&mut self, show_progress: bool) {
        self.show_progress = show_progress;
    }

    pub fn cache(&self) -> &CommitCache {
        &self.cache
    }

    /// Resolve the identifier and return the commit list, fetching it only
    /// when this (owner, repo, token) has not been seen yet.
    pub fn commits(&mut self, request: &AnalysisRequest) -> Result<(RepoId, &[CommitRecord])> {
        let repo = parse_repo_identifier(&request.repository)?;
        let token = request.token();

        let key = CacheKey::new(&repo, token);
        let source = &self.source;
        let show_progress = self.show_progress;
        let commits = self.cache.get_or_fetch(key, || {
            if token.is_none() {
                warn!("no GitHub token supplied; unauthenticated requests are limited to 60 per hour");
            }
            fetch_commits_with_spinner(source, &repo, token, show_progress)
        })?;
        Ok((repo, commits))
    }

    pub fn analyze(&mut self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let order = request.weekday_order;
        let (repo, commits) = self.commits(request)?;
        let (rows, stats) = analyze(commits)?;
        Ok(build_report(&repo, &rows, stats, order))
    }

    pub fn export(&mut self, request: &AnalysisRequest) -> Result<ExportOutput> {
        let (repo, commits) = self.commits(request)?;
        let (rows, _) = analyze(commits)?;
        Ok(build_export(&repo, rows))
    }

    /// Forget the cached list for this request and analyze again from the API.
    pub fn refresh(&mut self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let repo = parse_repo_identifier(&request.repository)?;
        self.cache.invalidate(&CacheKey::new(&repo, request.token()));
        self.analyze(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GhPulseError;
    use std::cell::Cell;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct OnePage {
        calls: Cell<usize>,
        records: Vec<CommitRecord>,
    }

    impl OnePage {
        fn new(records: Vec<CommitRecord>) -> Self {
            Self {
                calls: Cell::new(0),
                records,
            }
        }
    }

    impl CommitSource for OnePage {
        fn fetch_page(
            &self,
            _repo: &RepoId,
            page: u32,
            _per_page: u32,
            _token: Option<&str>,
        ) -> Result<Vec<CommitRecord>> {
            self.calls.set(self.calls.get() + 1);
            Ok(if page == 1 { self.records.clone() } else { Vec::new() })
        }
    }

    fn sample() -> Vec<CommitRecord> {
        vec![
            CommitRecord::new("2024-01-01T09:00:00Z", "a"),
            CommitRecord::new("2024-01-01T09:30:00Z", "b"),
            CommitRecord::new("2024-01-02T14:00:00Z", "c"),
        ]
    }

    #[test]
    fn analyze_uses_cache_on_repeat() {
        let mut session = Session::new(OnePage::new(sample()));
        let request = AnalysisRequest::new("https://github.com/o/r", None);
        let first = session.analyze(&request).unwrap();
        let second = session.analyze(&request).unwrap();
        assert_eq!(first.stats, second.stats);
        assert_eq!(session.source.calls.get(), 2);
        assert_eq!(session.cache().len(), 1);
    }

    #[test]
    fn different_token_fetches_again() {
        let mut session = Session::new(OnePage::new(sample()));
        session.analyze(&AnalysisRequest::new("o/r", None)).unwrap();
        session
            .analyze(&AnalysisRequest::new("o/r", Some("tok".to_string())))
            .unwrap();
        assert_eq!(session.source.calls.get(), 4);
        assert_eq!(session.cache().len(), 2);
    }

    #[test]
    fn refresh_refetches() {
        let mut session = Session::new(OnePage::new(sample()));
        let request = AnalysisRequest::new("o/r", None);
        session.analyze(&request).unwrap();
        let report = session.refresh(&request).unwrap();
        assert_eq!(report.stats.total_commits, 3);
        assert_eq!(session.source.calls.get(), 4);
    }

    #[test]
    fn invalid_identifier_never_hits_the_source() {
        let mut session = Session::new(OnePage::new(sample()));
        let err = session.analyze(&AnalysisRequest::new("nope", None)).unwrap_err();
        assert!(matches!(err, GhPulseError::InvalidInput(_)));
        assert_eq!(session.source.calls.get(), 0);
    }

    #[test]
    fn empty_repository_reports_empty_history() {
        let mut session = Session::new(OnePage::new(Vec::new()));
        let err = session.analyze(&AnalysisRequest::new("o/r", None)).unwrap_err();
        assert!(matches!(err, GhPulseError::EmptyHistory));
    }

    #[test]
    fn export_returns_one_row_per_commit() {
        let mut session = Session::new(OnePage::new(sample()));
        let export = session.export(&AnalysisRequest::new("o/r", None)).unwrap();
        assert_eq!(export.entries.len(), 3);
        assert_eq!(export.repository, "o/r");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_token_warns_only_when_fetching() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let mut session = Session::new(OnePage::new(sample()));
        let request = AnalysisRequest::new("o/r", None);
        tracing::subscriber::with_default(subscriber, || {
            session.analyze(&request).unwrap();
            session.analyze(&request).unwrap();
            session
                .analyze(&request.clone().with_weekday_order(WeekdayOrder::ByCount))
                .unwrap();
        });

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text.matches("no GitHub token supplied").count(), 1);
        assert_eq!(session.source.calls.get(), 2);
    }
}
