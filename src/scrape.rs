use crate::error::{Error, Result};

pub const LATEST_MARKER: &'static str = "Permanent";
pub const IMAGE_MARKER: &'static str = "Image URL";

/// Strips all markup from a fetched page, keeping text nodes in document order.
pub fn page_text(data: &[u8]) -> String {
  let html = String::from_utf8_lossy(data);
  let doc = scraper::Html::parse_document(&html);

  doc.root_element().text().collect()
}

/// Finds the first `marker` in `text`, keeps the rest of that line, splits it on
/// `delimiter` and returns the token at `index`.
pub fn field_after_marker<'a>(
  text: &'a str,
  marker: &'static str,
  delimiter: char,
  index: usize,
) -> Result<&'a str> {
  let start = text.find(marker).ok_or(Error::Extraction { marker })?;

  let line = text[start..]
    .split(|c: char| c == '\n' || c == '\r')
    .next()
    .unwrap_or("");

  line
    .split(delimiter)
    .nth(index)
    .ok_or(Error::Extraction { marker })
}

/// "Permanent link to this comic: https://xkcd.com/2950/"
pub fn latest_id(text: &str) -> Result<u64> {
  field_after_marker(text, LATEST_MARKER, '/', 3)?
    .parse()
    .map_err(|_| Error::Extraction {
      marker: LATEST_MARKER,
    })
}

/// "Image URL (for hotlinking/embedding): https://imgs.xkcd.com/comics/foo.png"
pub fn image_url(text: &str) -> Result<&str> {
  field_after_marker(text, IMAGE_MARKER, ' ', 4)
}
