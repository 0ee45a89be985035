use std::path::PathBuf;

use crate::comic::ComicUrl;
use crate::error::{Error, Result};
use crate::fetch::Fetch;
use crate::scrape;

pub const LANDING_URL: &'static str = "https://xkcd.com/";
pub const IMG_DIR: &'static str = "imgs";

pub struct Downloader<F> {
  fetcher: F,
  img_dir: PathBuf,
}

impl<F: Fetch> Downloader<F> {
  pub fn new(fetcher: F, img_dir: impl Into<PathBuf>) -> Self {
    Self {
      fetcher,
      img_dir: img_dir.into(),
    }
  }

  /// Number of the newest comic, scraped from the landing page.
  pub async fn fetch_latest(&self) -> Result<u64> {
    let data = self.fetcher.get_page(LANDING_URL).await?;
    let latest = scrape::latest_id(&scrape::page_text(&data))?;

    tracing::debug!("latest comic is {}", latest);

    Ok(latest)
  }

  /// A random comic when `url` is absent, otherwise the validated `url`.
  pub async fn resolve_url(&self, url: Option<&str>, check_range: bool) -> Result<ComicUrl> {
    match url {
      None => {
        let latest = self.fetch_latest().await?;
        let comic = ComicUrl::random(latest, &mut rand::thread_rng())?;

        tracing::info!("Got URL: random comic");
        tracing::debug!("random comic {} of {}", comic.id(), latest);

        Ok(comic)
      },
      Some(url) => {
        let comic = ComicUrl::parse(url)?;

        if check_range {
          comic.check_range(self.fetch_latest().await?)?;
        }

        tracing::info!("Got URL: {}", comic);

        Ok(comic)
      },
    }
  }

  pub async fn fetch_img_url(&self, comic: &ComicUrl) -> Result<String> {
    let data = self.fetcher.get_page(comic.as_str()).await?;
    tracing::info!("Got page from URL <{}>", comic);

    let text = scrape::page_text(&data);

    Ok(scrape::image_url(&text)?.to_string())
  }

  /// Saves the image as `<img_dir>/<id>.png`, overwriting any previous file.
  pub async fn fetch_image(&self, comic: &ComicUrl, img_url: &str) -> Result<PathBuf> {
    let path = self.img_path(comic);

    let data = self.fetcher.get_bytes(img_url).await?;

    tokio::fs::write(&path, &data)
      .await
      .map_err(|source| Error::Write {
        path: path.clone(),
        source,
      })?;

    tracing::info!(
      "Saved image from URL <{}> as {}",
      comic,
      path.display()
    );

    Ok(path)
  }

  pub fn img_path(&self, comic: &ComicUrl) -> PathBuf {
    self.img_dir.join(comic.file_name())
  }

  pub async fn run(&self, url: Option<&str>, check_range: bool) -> Result<PathBuf> {
    let comic = self.resolve_url(url, check_range).await?;
    let img_url = self.fetch_img_url(&comic).await?;

    self.fetch_image(&comic, &img_url).await
  }
}
