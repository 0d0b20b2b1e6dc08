use super::article_store::ArticleStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

/// Production store: one JSON document per article under `<data-dir>/articles`.
pub type FileStore = ArticleStore<FsBackend>;

impl FileStore {
    pub fn open(data_dir: PathBuf) -> Self {
        ArticleStore::with_backend(FsBackend::new(data_dir.join("articles")))
    }
}
