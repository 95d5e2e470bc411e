use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::loader::LoaderConfig;
use crate::domain::model::PortfolioDocument;
use crate::utils::error::{FolioError, Result};

/// What a consuming view reads: the current document, whether the single
/// fetch attempt is still in flight, and the failure cause when there is one
/// worth showing.
#[derive(Debug, Clone)]
pub struct LoadState {
    pub data: PortfolioDocument,
    pub loading: bool,
    pub error: Option<Arc<FolioError>>,
}

impl LoadState {
    fn initial() -> Self {
        Self {
            data: PortfolioDocument::bundled_default(),
            loading: true,
            error: None,
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Document(document) => {
                if !document.is_empty() {
                    self.data = document;
                }
                self.error = None;
            }
            // Timeouts are an expected degraded path, not a user-facing error.
            FetchOutcome::TimedOut => {}
            FetchOutcome::Failed(e) => {
                self.error = Some(Arc::new(e));
            }
        }
        self.loading = false;
    }
}

/// Outcome of the single fetch attempt.
#[derive(Debug)]
pub enum FetchOutcome {
    Document(PortfolioDocument),
    TimedOut,
    Failed(FolioError),
}

/// Fetches the portfolio document once, with a bounded wait. One loader
/// performs at most one request per mount; there are no retries, because the
/// bundled default makes a failed fetch harmless.
pub struct PortfolioLoader {
    config: LoaderConfig,
    client: Client,
}

impl PortfolioLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub async fn fetch(&self) -> FetchOutcome {
        match self.attempt().await {
            Ok(document) => FetchOutcome::Document(document),
            Err(FolioError::RequestError(e)) if e.is_timeout() => {
                debug!(
                    "Portfolio fetch timed out after {:?}, keeping bundled default",
                    self.config.timeout()
                );
                FetchOutcome::TimedOut
            }
            Err(e) => {
                warn!("Portfolio fetch failed: {}", e);
                FetchOutcome::Failed(e)
            }
        }
    }

    async fn attempt(&self) -> Result<PortfolioDocument> {
        let url = self.config.portfolio_url();
        debug!("Requesting portfolio document from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.config.timeout())
            .send()
            .await?;

        debug!("Provider response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::StatusError {
                status: status.as_u16(),
            });
        }

        let document = response.json::<PortfolioDocument>().await?;
        Ok(document)
    }
}

/// Handle owned by the consuming view for the lifetime of one mount. Dropping
/// it (or calling `unmount`) tears the mount down: a fetch that settles
/// afterwards is discarded without touching state.
pub struct PortfolioHandle {
    state: Arc<Mutex<LoadState>>,
    mounted: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl PortfolioHandle {
    pub async fn snapshot(&self) -> LoadState {
        self.state.lock().await.clone()
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Wait until the fetch attempt has run to completion. Intended for
    /// non-interactive consumers; a live view would just re-read `snapshot`.
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for PortfolioHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount the loader: state starts as the bundled default with `loading`
/// still true, and a single fetch task settles it exactly once. Each mount
/// manages its own request and teardown flag; a second mount neither cancels
/// nor coalesces with the first.
pub fn mount(loader: PortfolioLoader) -> PortfolioHandle {
    let state = Arc::new(Mutex::new(LoadState::initial()));
    let mounted = Arc::new(AtomicBool::new(true));

    let task = {
        let state = Arc::clone(&state);
        let mounted = Arc::clone(&mounted);
        tokio::spawn(async move {
            let outcome = loader.fetch().await;

            let mut state = state.lock().await;
            if !mounted.load(Ordering::Acquire) {
                debug!("View unmounted before the fetch settled, discarding result");
                return;
            }
            state.apply(outcome);
        })
    };

    PortfolioHandle {
        state,
        mounted,
        task: Some(task),
    }
}
