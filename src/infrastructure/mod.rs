mod clients;
mod storage;

pub use clients::{
    admin_api::AdminApiClient,
    github::{GithubStore, GITHUB_API_URL},
};
pub use storage::{
    checkout::{content_revision, CheckoutStore},
    fs_cache::FileSystemCache,
};
