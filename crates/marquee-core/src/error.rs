//! Error types for `marquee-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("theater not found: {0}")]
  TheaterNotFound(u32),

  #[error("unrecognised value: {0}")]
  Parse(#[from] strum::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
