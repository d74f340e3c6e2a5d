use std::path::Path;
use std::time::Duration;

use crate::error::StoreError;

/// Produces the raw bytes behind an image URL.
///
/// Called from worker threads, never from the UI thread.
pub trait ImageFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, StoreError>;
}

/// Fetches `http(s)://` URLs with a blocking reqwest client and reads
/// `file://` URLs and bare paths from disk
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("estore/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StoreError::HttpClient)?;
        Ok(Self { client })
    }

    fn fetch_http(&self, url: &str) -> Result<Vec<u8>, StoreError> {
        let response = self.client.get(url).send().map_err(|source| StoreError::Http {
            url: url.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            return Err(StoreError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|source| StoreError::Http {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, StoreError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return self.fetch_http(url);
        }

        let path = Path::new(url.strip_prefix("file://").unwrap_or(url));
        std::fs::read(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_local_files() {
        let path = std::env::temp_dir().join(format!("estore-fetch-{}.bin", std::process::id()));
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        assert_eq!(fetcher.fetch(path.to_str().unwrap()).unwrap(), vec![1, 2, 3]);

        let url = format!("file://{}", path.display());
        assert_eq!(fetcher.fetch(&url).unwrap(), vec![1, 2, 3]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch("file:///nonexistent/estore.png").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
