use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("request to {url} failed: {source}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("bad response from {url}: status {status}, content-type {content_type:?}")]
  BadResponse {
    url: String,
    status: u16,
    content_type: Option<String>,
  },

  #[error("page format not recognized: no field found after `{marker}`")]
  Extraction { marker: &'static str },

  #[error("URL is formatted incorrectly: {0}")]
  MalformedUrl(String),

  #[error("no comics published yet")]
  NoComics,

  #[error("comic {id} is not in the valid range 1..={latest}")]
  OutOfRange { id: u64, latest: u64 },

  #[error("failed to download image {url}: {source}")]
  Download {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("failed to write {}: {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
