use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::error::{Error, Result};

const USER_AGENT: &'static str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.93 Safari/537.36";

pub trait Fetch {
  /// GET an HTML page. Anything but a 200 with an html content-type is a failure.
  async fn get_page(&self, url: &str) -> Result<Vec<u8>>;

  /// GET raw bytes with no status or content-type check.
  async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

pub fn is_good_response(status: StatusCode, content_type: Option<&str>) -> bool {
  match content_type {
    Some(content_type) => {
      status == StatusCode::OK && content_type.to_lowercase().contains("html")
    },
    None => false,
  }
}

pub struct HttpFetcher {
  http_client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new() -> Self {
    Self {
      http_client: reqwest::Client::new(),
    }
  }
}

impl Fetch for HttpFetcher {
  async fn get_page(&self, url: &str) -> Result<Vec<u8>> {
    tracing::debug!("GET {}", url);

    let transport = |source: reqwest::Error| {
      tracing::warn!("Error during requests to {} : {}", url, source);
      Error::Transport {
        url: url.to_string(),
        source,
      }
    };

    let resp = self
      .http_client
      .get(url)
      .header("user-agent", USER_AGENT)
      .send()
      .await
      .map_err(transport)?;

    let status = resp.status();
    let content_type = resp
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .map(str::to_string);

    if !is_good_response(status, content_type.as_deref()) {
      return Err(Error::BadResponse {
        url: url.to_string(),
        status: status.as_u16(),
        content_type,
      });
    }

    let data = resp.bytes().await.map_err(transport)?;
    tracing::debug!("{} bytes from {}", data.len(), url);

    Ok(data.to_vec())
  }

  async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
    tracing::debug!("GET {}", url);

    let download = |source: reqwest::Error| Error::Download {
      url: url.to_string(),
      source,
    };

    let data = self
      .http_client
      .get(url)
      .header("user-agent", USER_AGENT)
      .send()
      .await
      .map_err(download)?
      .bytes()
      .await
      .map_err(download)?;

    tracing::debug!("{} bytes from {}", data.len(), url);

    Ok(data.to_vec())
  }
}
