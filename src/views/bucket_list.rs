//! Bucket list page state

use crate::client::BrowserApi;
use crate::store::Bucket;
use log::warn;

pub const LOAD_BUCKETS_FAILED: &str =
    "Failed to load buckets. Please check if the object store is running.";
pub const EMPTY_BUCKET_NAME: &str = "Bucket name cannot be empty";

#[derive(Debug, Clone, PartialEq)]
pub enum BucketListState {
    Loading,
    Ready(Vec<Bucket>),
    /// Create-bucket form is open over the loaded list
    Creating {
        buckets: Vec<Bucket>,
        draft: String,
        error: Option<String>,
    },
    Failed(String),
}

#[derive(Debug)]
pub struct BucketListView {
    state: BucketListState,
}

impl Default for BucketListView {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketListView {
    pub fn new() -> Self {
        Self {
            state: BucketListState::Loading,
        }
    }

    pub fn state(&self) -> &BucketListState {
        &self.state
    }

    pub fn buckets(&self) -> &[Bucket] {
        match &self.state {
            BucketListState::Ready(buckets) | BucketListState::Creating { buckets, .. } => {
                buckets.as_slice()
            }
            BucketListState::Loading | BucketListState::Failed(_) => &[],
        }
    }

    /// Banner message, if any
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            BucketListState::Failed(message) => Some(message.as_str()),
            BucketListState::Creating { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, BucketListState::Loading)
    }

    pub async fn load(&mut self, api: &dyn BrowserApi) {
        self.state = BucketListState::Loading;
        self.state = match api.list_buckets().await {
            Ok(buckets) => BucketListState::Ready(buckets),
            Err(e) => {
                warn!("Failed to load buckets: {}", e);
                BucketListState::Failed(LOAD_BUCKETS_FAILED.to_string())
            }
        };
    }

    /// Open the create form; only possible once the list is loaded
    pub fn open_create(&mut self) -> bool {
        if let BucketListState::Ready(buckets) = &mut self.state {
            self.state = BucketListState::Creating {
                buckets: std::mem::take(buckets),
                draft: String::new(),
                error: None,
            };
            return true;
        }
        false
    }

    pub fn set_draft(&mut self, name: impl Into<String>) {
        if let BucketListState::Creating { draft, .. } = &mut self.state {
            *draft = name.into();
        }
    }

    pub fn cancel_create(&mut self) {
        if let BucketListState::Creating { buckets, .. } = &mut self.state {
            self.state = BucketListState::Ready(std::mem::take(buckets));
        }
    }

    /// Submit the form. On success the list is reloaded; on failure the form
    /// stays open with the error.
    pub async fn submit_create(&mut self, api: &dyn BrowserApi) {
        let name = match &mut self.state {
            BucketListState::Creating { draft, error, .. } => {
                if draft.trim().is_empty() {
                    *error = Some(EMPTY_BUCKET_NAME.to_string());
                    return;
                }
                draft.clone()
            }
            _ => return,
        };

        match api.create_bucket(&name).await {
            Ok(_) => self.load(api).await,
            Err(e) => {
                warn!("Failed to create bucket {}: {}", name, e);
                if let BucketListState::Creating { error, .. } = &mut self.state {
                    *error = Some(e.to_string());
                }
            }
        }
    }
}
