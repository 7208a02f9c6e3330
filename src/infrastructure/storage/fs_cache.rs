use crate::domain::{DataCache, SiteData};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const SITE_DATA_KEY: &str = "site_data";

#[derive(Clone)]
pub struct FileSystemCache {
    cache_dir: PathBuf,
}

impl FileSystemCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        self.ensure_dir(&self.cache_dir)?;
        let content = serde_json::to_string_pretty(data)?;
        fs::write(self.get_path_for_key(key), content)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.get_path_for_key(key);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl DataCache for FileSystemCache {
    fn load(&self) -> Result<Option<SiteData>> {
        self.read_json_file(SITE_DATA_KEY)
    }

    fn save(&self, data: &SiteData) -> Result<()> {
        self.write_json_file(SITE_DATA_KEY, data)
    }
}
