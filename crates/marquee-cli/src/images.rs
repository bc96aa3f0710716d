//! Filesystem-backed image probe.

use std::path::PathBuf;

use marquee_core::image::ImageProbe;

/// Looks up image paths like `/theaters/theater-1.jpg` under a local root
/// directory (by default `public/`).
#[derive(Debug, Clone)]
pub struct FsImages {
  root: PathBuf,
}

impl FsImages {
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }
}

impl ImageProbe for FsImages {
  fn exists(&self, path: &str) -> bool {
    self.root.join(path.trim_start_matches('/')).is_file()
  }
}
