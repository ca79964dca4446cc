//! Page state for the bucket list and bucket detail views

mod bucket_detail;
mod bucket_list;
pub mod format;
#[cfg(test)]
mod testing;

pub use bucket_detail::{
    BucketDetailView, DetailPhase, FetchTicket, FileRow, FolderRow, DOWNLOAD_FAILED,
    LOAD_OBJECTS_FAILED,
};
pub use bucket_list::{BucketListState, BucketListView, EMPTY_BUCKET_NAME, LOAD_BUCKETS_FAILED};
pub use format::Breadcrumb;
