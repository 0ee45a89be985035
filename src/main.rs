use clap::Parser;

mod comic;
mod error;
mod fetch;
mod logging;
mod scrape;
mod xkcd;

/// Downloads an xkcd comic image, or a random one when no URL is given
#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
  /// Comic page URL, e.g. https://xkcd.com/614/
  url: Option<String>,

  /// Directory the image is saved into; it must already exist
  #[clap(long, default_value = xkcd::IMG_DIR)]
  out_dir: String,

  /// Reject comic numbers newer than the latest published comic
  #[clap(long)]
  check_range: bool,

  /// Log requests and byte counts
  #[clap(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() {
  let args = Args::parse();

  logging::init_logging(args.verbose);

  let downloader = xkcd::Downloader::new(fetch::HttpFetcher::new(), &args.out_dir);
  if let Err(err) = downloader
    .run(args.url.as_deref(), args.check_range)
    .await
  {
    tracing::error!("Error: {}", err);
    std::process::exit(1);
  }
}
