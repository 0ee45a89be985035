use rand::Rng;

use crate::error::{Error, Result};

pub const HOST: &'static str = "xkcd.com";

/// A validated comic page URL, e.g. `https://xkcd.com/614/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicUrl {
  raw: String,
  segment: String,
  id: u64,
}

impl ComicUrl {
  /// Checks the host and numeric id by slash position only. The input is kept unchanged.
  pub fn parse(raw: &str) -> Result<Self> {
    let segments: Vec<&str> = raw.split('/').collect();

    let host = segments.get(2).copied().unwrap_or("");
    let segment = segments.get(3).copied().unwrap_or("");

    if host != HOST || segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
      return Err(Error::MalformedUrl(raw.to_string()));
    }

    let id = segment
      .parse()
      .map_err(|_| Error::MalformedUrl(raw.to_string()))?;

    Ok(Self {
      raw: raw.to_string(),
      segment: segment.to_string(),
      id,
    })
  }

  pub fn from_id(id: u64) -> Self {
    Self {
      raw: format!("https://{}/{}/", HOST, id),
      segment: id.to_string(),
      id,
    }
  }

  /// Picks a comic uniformly from `1..=latest`.
  pub fn random<R: Rng + ?Sized>(latest: u64, rng: &mut R) -> Result<Self> {
    if latest == 0 {
      return Err(Error::NoComics);
    }

    Ok(Self::from_id(rng.gen_range(1..=latest)))
  }

  pub fn check_range(&self, latest: u64) -> Result<()> {
    if self.id == 0 || self.id > latest {
      return Err(Error::OutOfRange {
        id: self.id,
        latest,
      });
    }

    Ok(())
  }

  pub fn id(&self) -> u64 {
    self.id
  }

  pub fn as_str(&self) -> &str {
    &self.raw
  }

  pub fn file_name(&self) -> String {
    format!("{}.png", self.segment)
  }
}

impl std::fmt::Display for ComicUrl {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.raw)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn accepts_comic_urls_unchanged() {
    for raw in ["https://xkcd.com/1/", "https://xkcd.com/614/", "https://xkcd.com/2950"] {
      let url = ComicUrl::parse(raw).unwrap();
      assert_eq!(url.as_str(), raw);
    }
  }

  #[test]
  fn rejects_foreign_hosts_and_bad_ids() {
    for raw in [
      "https://notxkcd.com/221/",
      "https://www.xkcd.com/221/",
      "https://xkcd.com/about/",
      "https://xkcd.com/12a/",
      "https://xkcd.com//",
      "https://xkcd.com",
      "xkcd.com/221/",
      "",
    ] {
      assert!(
        matches!(ComicUrl::parse(raw), Err(Error::MalformedUrl(_))),
        "{} should be rejected",
        raw
      );
    }
  }

  #[test]
  fn file_name_uses_id_segment() {
    let url = ComicUrl::parse("https://xkcd.com/614/").unwrap();
    assert_eq!(url.id(), 614);
    assert_eq!(url.file_name(), "614.png");
  }

  #[test]
  fn random_stays_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    for latest in [1, 2, 10, 2950] {
      for _ in 0..1000 {
        let url = ComicUrl::random(latest, &mut rng).unwrap();
        assert!((1..=latest).contains(&url.id()));
        assert_eq!(url, ComicUrl::parse(url.as_str()).unwrap());
      }
    }
  }

  #[test]
  fn random_with_no_comics_fails() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(matches!(ComicUrl::random(0, &mut rng), Err(Error::NoComics)));
  }

  #[test]
  fn check_range_bounds() {
    assert!(ComicUrl::from_id(1).check_range(100).is_ok());
    assert!(ComicUrl::from_id(100).check_range(100).is_ok());
    assert!(matches!(
      ComicUrl::from_id(101).check_range(100),
      Err(Error::OutOfRange { id: 101, latest: 100 })
    ));
    assert!(ComicUrl::parse("https://xkcd.com/0/")
      .unwrap()
      .check_range(100)
      .is_err());
  }
}
