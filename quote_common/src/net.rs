//! Remote endpoints and local defaults shared by the scraper, API and plotter.

/// Page generating the personalised IDs and colors; takes `?id=<student id>`.
pub const PAGE_URL: &str = "https://tma111.netlify.app/.netlify/functions/generate";
/// Quote records live under `{QUOTES_URL}/{id}`.
pub const QUOTES_URL: &str = "https://dummyjson.com/quotes";
/// Image generator; extended with `/{bg}/{fg}?text=...`.
pub const IMAGE_URL: &str = "https://dummyjson.com/image/1200x200";
/// Font size requested from the image generator.
pub const IMAGE_FONT_SIZE: u32 = 18;

/// JSON store written by the scraper and read by the API and plotter.
pub const DEFAULT_QUOTES_FILE: &str = "quotes.json";
/// Directory receiving one PNG per quote.
pub const DEFAULT_IMAGES_DIR: &str = "quotes";
/// Chart written by the plotter.
pub const DEFAULT_HISTOGRAM_FILE: &str = "histogram.png";
/// Address the query API binds to by default.
pub const API_HOST: [u8; 4] = [127, 0, 0, 1];
/// Port the query API listens on.
pub const API_PORT: u16 = 8000;
