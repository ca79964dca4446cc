use crate::api::{DOWNLOAD_URL_TTL, GENERIC_ERROR};
use crate::client::{BrowserApi, ClientError, ClientResult};
use crate::store::{
    Bucket, InMemoryStore, ListObjectsOptions, ListingPage, ObjectStore, StoreError,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// [`BrowserApi`] answering from an [`InMemoryStore`] the way the HTTP API
/// would, with a fixed page size
pub(crate) struct FakeApi {
    store: InMemoryStore,
    page_size: i32,
    failing: AtomicBool,
    created: Mutex<Vec<String>>,
}

impl FakeApi {
    fn new(page_size: i32) -> Self {
        Self {
            store: InMemoryStore::new(),
            page_size,
            failing: AtomicBool::new(false),
            created: Mutex::new(Vec::new()),
        }
    }

    pub async fn with_buckets(names: &[&str]) -> Self {
        let api = Self::new(1000);
        for name in names {
            api.store.create_bucket(name).await.unwrap();
        }
        api
    }

    pub async fn with_objects(bucket: &str, keys: &[&str], page_size: i32) -> Self {
        let api = Self::new(page_size);
        api.store.create_bucket(bucket).await.unwrap();
        for key in keys {
            api.store.put_object(bucket, key, 1).await.unwrap();
        }
        api
    }

    pub fn failing() -> Self {
        let api = Self::new(1000);
        api.set_failing(true);
        api
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    fn check(&self) -> ClientResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(())
    }
}

fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        message: GENERIC_ERROR.to_string(),
    }
}

fn from_store(_: StoreError) -> ClientError {
    server_error()
}

#[async_trait]
impl BrowserApi for FakeApi {
    async fn list_buckets(&self) -> ClientResult<Vec<Bucket>> {
        self.check()?;
        self.store.list_buckets().await.map_err(from_store)
    }

    async fn create_bucket(&self, name: &str) -> ClientResult<String> {
        self.check()?;
        self.store.create_bucket(name).await.map_err(from_store)?;
        self.created.lock().unwrap().push(name.to_string());
        Ok(format!("Bucket {} created successfully", name))
    }

    async fn list_objects(
        &self,
        bucket: &str,
        options: &ListObjectsOptions,
    ) -> ClientResult<ListingPage> {
        self.check()?;
        let options = options.clone().with_max_keys(self.page_size);
        self.store
            .list_objects(bucket, &options)
            .await
            .map_err(from_store)
    }

    async fn download_url(&self, bucket: &str, key: &str) -> ClientResult<String> {
        self.check()?;
        self.store
            .presign_download(bucket, key, DOWNLOAD_URL_TTL)
            .await
            .map_err(from_store)
    }
}
