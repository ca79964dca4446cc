//! Folder view of one bucket under a prefix
//!
//! The view is sans-IO at its core: [`BucketDetailView::navigate`] and
//! [`BucketDetailView::load_more`] issue a [`FetchTicket`], the caller performs
//! the listing, and [`BucketDetailView::apply`] folds the result back in. Each
//! ticket carries a token; only the most recently issued token is accepted, so
//! a slow response from a superseded navigation can never overwrite the
//! current listing. `open`, `refresh` and `fetch_more` run the whole cycle
//! against a [`BrowserApi`].
//!
//! Pages accumulate: "load more" appends the next page to the folders and
//! files already shown for the current bucket and prefix.

use super::format::{
    breadcrumbs, file_display_name, folder_display_name, format_size, format_timestamp,
    parent_prefix, Breadcrumb,
};
use crate::client::{BrowserApi, ClientResult};
use crate::store::{ListObjectsOptions, ListingPage, ObjectEntry};
use log::{debug, warn};
use std::collections::HashSet;

pub const LOAD_OBJECTS_FAILED: &str =
    "Failed to load objects. Please check if the object store is running.";
pub const DOWNLOAD_FAILED: &str = "Failed to generate download link.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPhase {
    /// First page for the current location is in flight
    Loading,
    /// A further page is in flight; rows already shown stay visible
    LoadingMore,
    Ready,
    Failed(String),
}

/// A listing request issued by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub bucket: String,
    pub options: ListObjectsOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRow {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub key: String,
    pub name: String,
    pub size: String,
    pub last_modified: String,
}

#[derive(Debug)]
pub struct BucketDetailView {
    bucket: String,
    prefix: String,
    phase: DetailPhase,
    folders: Vec<String>,
    files: Vec<ObjectEntry>,
    seen_folders: HashSet<String>,
    seen_keys: HashSet<String>,
    cursor: Option<String>,
    notice: Option<String>,
    issued: u64,
}

impl BucketDetailView {
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: prefix.into(),
            phase: DetailPhase::Loading,
            folders: Vec::new(),
            files: Vec::new(),
            seen_folders: HashSet::new(),
            seen_keys: HashSet::new(),
            cursor: None,
            notice: None,
            issued: 0,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// Move to another bucket or prefix. Everything shown so far is dropped.
    pub fn navigate(
        &mut self,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
    ) -> FetchTicket {
        self.bucket = bucket.into();
        self.prefix = prefix.into();
        self.reset()
    }

    /// Restart the listing for the current location
    pub fn reset(&mut self) -> FetchTicket {
        self.phase = DetailPhase::Loading;
        self.folders.clear();
        self.files.clear();
        self.seen_folders.clear();
        self.seen_keys.clear();
        self.cursor = None;
        self.notice = None;
        self.issue(None)
    }

    /// Request the page after the last one received, if there is one
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.phase != DetailPhase::Ready {
            return None;
        }
        let cursor = self.cursor.clone()?;
        self.phase = DetailPhase::LoadingMore;
        Some(self.issue(Some(cursor)))
    }

    fn issue(&mut self, cursor: Option<String>) -> FetchTicket {
        self.issued += 1;
        FetchTicket {
            token: self.issued,
            bucket: self.bucket.clone(),
            options: ListObjectsOptions::default()
                .with_prefix(self.prefix.clone())
                .with_continuation_token(cursor),
        }
    }

    /// Fold a listing result into the view. Returns `false` when the result
    /// belongs to a superseded request and was discarded.
    pub fn apply(&mut self, token: u64, result: ClientResult<ListingPage>) -> bool {
        if token != self.issued {
            debug!(
                "Discarding stale listing response {} (latest {})",
                token, self.issued
            );
            return false;
        }

        match result {
            Ok(page) => {
                for common in page.common_prefixes {
                    if self.seen_folders.insert(common.prefix.clone()) {
                        self.folders.push(common.prefix);
                    }
                }
                for entry in page.contents {
                    // The directory marker for the current prefix is not a file
                    if entry.key == self.prefix {
                        continue;
                    }
                    if self.seen_keys.insert(entry.key.clone()) {
                        self.files.push(entry);
                    }
                }
                self.cursor = page.next_continuation_token;
                self.notice = None;
                self.phase = DetailPhase::Ready;
            }
            Err(e) => {
                warn!("Failed to list {}/{}: {}", self.bucket, self.prefix, e);
                self.folders.clear();
                self.files.clear();
                self.seen_folders.clear();
                self.seen_keys.clear();
                self.cursor = None;
                self.phase = DetailPhase::Failed(LOAD_OBJECTS_FAILED.to_string());
            }
        }
        true
    }

    async fn run(&mut self, api: &dyn BrowserApi, ticket: FetchTicket) {
        let result = api.list_objects(&ticket.bucket, &ticket.options).await;
        self.apply(ticket.token, result);
    }

    pub async fn open(
        &mut self,
        api: &dyn BrowserApi,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
    ) {
        let ticket = self.navigate(bucket, prefix);
        self.run(api, ticket).await;
    }

    pub async fn refresh(&mut self, api: &dyn BrowserApi) {
        let ticket = self.reset();
        self.run(api, ticket).await;
    }

    /// Fetch and append the next page. Returns `false` if there was nothing
    /// more to load.
    pub async fn fetch_more(&mut self, api: &dyn BrowserApi) -> bool {
        match self.load_more() {
            Some(ticket) => {
                self.run(api, ticket).await;
                true
            }
            None => false,
        }
    }

    /// Sign a download link for `key`. The caller opens the returned URL in a
    /// new browsing context. Failure leaves the listing as it is and sets a
    /// notice.
    pub async fn download(&mut self, api: &dyn BrowserApi, key: &str) -> Option<String> {
        match api.download_url(&self.bucket, key).await {
            Ok(url) => {
                self.notice = None;
                Some(url)
            }
            Err(e) => {
                warn!("Failed to sign download for {}/{}: {}", self.bucket, key, e);
                self.notice = Some(DOWNLOAD_FAILED.to_string());
                None
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Banner message: a failed listing, or a transient download failure
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DetailPhase::Failed(message) => Some(message.as_str()),
            _ => self.notice.as_deref(),
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    pub fn folder_rows(&self) -> Vec<FolderRow> {
        self.folders
            .iter()
            .map(|folder| FolderRow {
                name: folder_display_name(folder, &self.prefix),
                prefix: folder.clone(),
            })
            .collect()
    }

    pub fn file_rows(&self) -> Vec<FileRow> {
        self.files
            .iter()
            .map(|entry| FileRow {
                key: entry.key.clone(),
                name: file_display_name(&entry.key, &self.prefix),
                size: format_size(entry.size),
                last_modified: format_timestamp(entry.last_modified),
            })
            .collect()
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumbs(&self.prefix)
    }

    pub fn parent_prefix(&self) -> Option<String> {
        parent_prefix(&self.prefix)
    }

    /// Last prefix segment, or the bucket name at the root
    pub fn heading(&self) -> &str {
        self.prefix
            .split('/')
            .filter(|part| !part.is_empty())
            .next_back()
            .unwrap_or(self.bucket.as_str())
    }
}
