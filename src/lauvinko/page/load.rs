use super::PageStatus;
use crate::lauvinko::client::ApiClient;
use crate::lauvinko::document::Document;
use crate::lauvinko::error::FetchError;
use crate::lauvinko::gloss::{collect_requests, GlossCache, GlossLoader, GlossParams, GlossSource};
use std::future::Future;
use std::sync::Arc;

/// Anything that can serve page documents.
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, name: &str) -> impl Future<Output = Result<Document, FetchError>> + Send;
}

impl PageSource for ApiClient {
    async fn fetch_page(&self, name: &str) -> Result<Document, FetchError> {
        self.page(name).await
    }
}

/// One loaded page and the glosses it is waiting on.
pub struct PageInstance {
    name: String,
    status: PageStatus,
    glosses: GlossLoader,
}

impl PageInstance {
    /// A page whose document has not arrived yet.
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: PageStatus::Pending,
            glosses: GlossLoader::default(),
        }
    }

    /// Fetch the page's document, then start fetching its glosses. A page that cannot be
    /// fetched or decoded is marked failed; nothing is propagated.
    pub async fn load<P, G>(name: impl Into<String>, pages: &P, glosses: Arc<G>) -> Self
    where
        P: PageSource,
        G: GlossSource,
    {
        let mut page = Self::pending(name);
        tracing::debug!("loading page {}", page.name);

        match pages.fetch_page(&page.name).await {
            Ok(document) => {
                page.glosses = GlossLoader::spawn(glosses, collect_requests(&document));
                page.status = PageStatus::Loaded(document);
            }
            Err(err) => {
                tracing::warn!("page {} failed to load: {}", page.name, err);
                page.status = PageStatus::Failed;
            }
        }
        page
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn glosses(&self) -> &GlossCache {
        self.glosses.cache()
    }

    /// Gloss fetches still outstanding.
    pub fn in_flight(&self) -> usize {
        self.glosses.in_flight()
    }

    /// Wait for the next gloss to settle. `None` once nothing is outstanding.
    pub async fn next_settled(&mut self) -> Option<GlossParams> {
        self.glosses.next_settled().await
    }

    /// Wait for every gloss to settle.
    pub async fn settle_all(&mut self) {
        while self.next_settled().await.is_some() {}
    }
}
