//! Fetch state of the glosses on one rendered page.

use super::data::{GlossData, GlossResponse};
use super::spec::GlossParams;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Anything that can answer gloss requests.
///
/// Implementations must always resolve: transport and API failures come back as
/// `Err(message)`, never as a panic.
pub trait GlossSource: Send + Sync + 'static {
    fn fetch_gloss(&self, params: &GlossParams) -> impl Future<Output = GlossResponse> + Send;
}

/// Where one gloss stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GlossState {
    /// Not settled yet, or never will be; renders as nothing.
    #[default]
    Pending,
    Loaded(GlossData),
    Failed(String),
}

impl GlossState {
    pub fn data(&self) -> Option<&GlossData> {
        match self {
            GlossState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GlossState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

static PENDING: GlossState = GlossState::Pending;

/// Gloss states of one page load, keyed by language and outline.
#[derive(Debug, Clone, Default)]
pub struct GlossCache {
    entries: HashMap<GlossParams, GlossState>,
}

impl GlossCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, params: &GlossParams) -> &GlossState {
        self.entries.get(params).unwrap_or(&PENDING)
    }

    /// Record a settled fetch. Rows of unequal length are recorded as a failure.
    pub fn settle(&mut self, params: GlossParams, response: GlossResponse) {
        let state = match response {
            Ok(data) if data.is_aligned() => GlossState::Loaded(data),
            Ok(_) => {
                tracing::warn!(
                    "gloss rows for {:?} ({}) have unequal lengths",
                    params.outline,
                    params.language
                );
                GlossState::Failed("Misaligned gloss response".to_string())
            }
            Err(message) => {
                tracing::warn!(
                    "gloss for {:?} ({}) failed: {}",
                    params.outline,
                    params.language,
                    message
                );
                GlossState::Failed(message)
            }
        };
        self.entries.insert(params, state);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Concurrent gloss fetches for one page load.
///
/// Each distinct request is fetched once, and fetches settle in whatever order they finish.
/// Dropping the loader aborts every fetch still in flight, so a torn-down page never
/// receives late results.
#[derive(Default)]
pub struct GlossLoader {
    tasks: JoinSet<(GlossParams, GlossResponse)>,
    cache: GlossCache,
}

impl GlossLoader {
    /// Start fetching every request. Must be called from within a tokio runtime.
    pub fn spawn<S, I>(source: Arc<S>, requests: I) -> Self
    where
        S: GlossSource,
        I: IntoIterator<Item = GlossParams>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut tasks = JoinSet::new();

        for params in requests {
            if !seen.insert(params.clone()) {
                continue;
            }
            let source = Arc::clone(&source);
            tracing::debug!("fetching gloss {:?} ({})", params.outline, params.language);
            tasks.spawn(async move {
                let response = source.fetch_gloss(&params).await;
                (params, response)
            });
        }

        Self {
            tasks,
            cache: GlossCache::new(),
        }
    }

    /// Number of fetches not yet settled.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn cache(&self) -> &GlossCache {
        &self.cache
    }

    /// Wait for the next fetch to settle and record it. Returns the settled request, or
    /// `None` once nothing is in flight.
    pub async fn next_settled(&mut self) -> Option<GlossParams> {
        loop {
            match self.tasks.join_next().await? {
                Ok((params, response)) => {
                    self.cache.settle(params.clone(), response);
                    return Some(params);
                }
                // A task that panicked or was cancelled leaves its gloss pending.
                Err(err) => tracing::warn!("gloss fetch task did not complete: {}", err),
            }
        }
    }

    /// Wait for every fetch and hand back the filled cache.
    pub async fn settle_all(mut self) -> GlossCache {
        while self.next_settled().await.is_some() {}
        self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lauvinko::gloss::Language;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;
    use tokio::time::timeout;

    struct CountingSource {
        calls: AtomicUsize,
    }

    impl GlossSource for CountingSource {
        async fn fetch_gloss(&self, params: &GlossParams) -> GlossResponse {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if params.outline == "bad" {
                Err("bad outline".to_string())
            } else {
                Ok(GlossData {
                    analysis: vec![params.outline.clone()],
                    romanization: vec![params.outline.clone()],
                    falavay: vec![params.outline.clone()],
                    narrow_transcription: vec![params.outline.clone()],
                    broad_transcription: vec![params.outline.clone()],
                })
            }
        }
    }

    /// Never answers; signals when a fetch starts and when its future is dropped.
    struct HangingSource {
        started: Arc<Notify>,
        cancelled: Arc<Notify>,
    }

    struct NotifyOnDrop(Arc<Notify>);

    impl Drop for NotifyOnDrop {
        fn drop(&mut self) {
            self.0.notify_one();
        }
    }

    impl GlossSource for HangingSource {
        async fn fetch_gloss(&self, _params: &GlossParams) -> GlossResponse {
            let _guard = NotifyOnDrop(Arc::clone(&self.cancelled));
            self.started.notify_one();
            std::future::pending::<GlossResponse>().await
        }
    }

    #[test]
    fn missing_entries_are_pending() {
        let cache = GlossCache::new();
        let params = GlossParams::new(Language::Lauvinko, "x");
        assert_eq!(cache.get(&params), &GlossState::Pending);
    }

    #[test]
    fn misaligned_data_settles_as_failure() {
        let mut cache = GlossCache::new();
        let params = GlossParams::new(Language::Lauvinko, "x");
        let data = GlossData {
            analysis: vec!["a".into()],
            ..GlossData::default()
        };
        cache.settle(params.clone(), Ok(data));
        assert_eq!(cache.get(&params).error(), Some("Misaligned gloss response"));
    }

    #[tokio::test]
    async fn loads_each_distinct_request_once() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        let good = GlossParams::new(Language::Lauvinko, "word");
        let bad = GlossParams::new(Language::ProtoKasanic, "bad");

        let loader = GlossLoader::spawn(
            Arc::clone(&source),
            vec![good.clone(), bad.clone(), good.clone()],
        );
        assert_eq!(loader.in_flight(), 2);

        let cache = loader.settle_all().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.get(&good).data().unwrap().width(), 1);
        assert_eq!(cache.get(&bad).error(), Some("bad outline"));
    }

    #[tokio::test]
    async fn next_settled_reports_each_request() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        let mut loader = GlossLoader::spawn(
            source,
            vec![
                GlossParams::new(Language::Lauvinko, "a"),
                GlossParams::new(Language::Lauvinko, "b"),
            ],
        );

        let mut settled = Vec::new();
        while let Some(params) = loader.next_settled().await {
            settled.push(params.outline);
        }
        settled.sort();
        assert_eq!(settled, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(loader.cache().len(), 2);
    }

    #[tokio::test]
    async fn hung_fetch_stays_pending_and_is_aborted_on_drop() {
        let started = Arc::new(Notify::new());
        let cancelled = Arc::new(Notify::new());
        let source = Arc::new(HangingSource {
            started: Arc::clone(&started),
            cancelled: Arc::clone(&cancelled),
        });
        let params = GlossParams::new(Language::Lauvinko, "ratu");

        let mut loader = GlossLoader::spawn(source, vec![params.clone()]);
        timeout(Duration::from_secs(5), started.notified())
            .await
            .expect("fetch never started");

        assert!(timeout(Duration::from_millis(50), loader.next_settled())
            .await
            .is_err());
        assert_eq!(loader.in_flight(), 1);
        assert_eq!(loader.cache().get(&params), &GlossState::Pending);

        drop(loader);
        timeout(Duration::from_secs(5), cancelled.notified())
            .await
            .expect("fetch was not cancelled when the loader was dropped");
    }
}
