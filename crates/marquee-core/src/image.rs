//! Image references: the primary per-theater path and the stock fallback.
//!
//! Whether the primary image actually exists is the consumer's business. The
//! consumer probes it through [`ImageProbe`]; on failure it substitutes the
//! deterministic fallback chosen by [`fallback_image`].

use crate::theater::Theater;

/// Root under which primary images are served.
pub const IMAGES_ROOT: &str = "/theaters";

const MULTIPLEX_IMAGES: [&str; 8] = [
  "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba?w=800&q=80",
  "https://images.unsplash.com/photo-1517604931442-7e0c8ed2963c?w=800&q=80",
  "https://images.unsplash.com/photo-1595769816263-9b910be24d5f?w=800&q=80",
  "https://images.unsplash.com/photo-1574267432644-f610bcb4f0e4?w=800&q=80",
  "https://images.unsplash.com/photo-1635805737707-575885ab0820?w=800&q=80",
  "https://images.unsplash.com/photo-1524985069026-dd778a71c7b4?w=800&q=80",
  "https://images.unsplash.com/photo-1596445836561-991bcd39a86f?w=800&q=80",
  "https://images.unsplash.com/photo-1626814026160-2237a95fc5a0?w=800&q=80",
];

const SINGLE_SCREEN_IMAGES: [&str; 8] = [
  "https://images.unsplash.com/photo-1536440136628-849c177e76a1?w=800&q=80",
  "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?w=800&q=80",
  "https://images.unsplash.com/photo-1478720568477-152d9b164e26?w=800&q=80",
  "https://images.unsplash.com/photo-1594909122845-11baa439b7bf?w=800&q=80",
  "https://images.unsplash.com/photo-1568876694728-451bbf694b83?w=800&q=80",
  "https://images.unsplash.com/photo-1598899134739-24c46f58b8c0?w=800&q=80",
  "https://images.unsplash.com/photo-1507924538820-ede94a04019d?w=800&q=80",
  "https://images.unsplash.com/photo-1542204165-65bf26472b9b?w=800&q=80",
];

const BOUTIQUE_IMAGES: [&str; 4] = [
  "https://images.unsplash.com/photo-1560169897-fc0cdbdfa4d5?w=800&q=80",
  "https://images.unsplash.com/photo-1578645510447-e20b4311e3ce?w=800&q=80",
  "https://images.unsplash.com/photo-1604975701397-6365ccbd028a?w=800&q=80",
  "https://images.unsplash.com/photo-1613095219511-e094a0ee61f0?w=800&q=80",
];

// ─── Paths ───────────────────────────────────────────────────────────────────

/// `/theaters/theater-<id>.jpg`. Not guaranteed to exist.
pub fn primary_image(id: u32) -> String {
  format!("{IMAGES_ROOT}/theater-{id}.jpg")
}

/// The stock pool a `type` label draws from. Matching is exact, so upcoming
/// variants of any type share the multiplex pool.
pub fn fallback_pool(theater_type: &str) -> &'static [&'static str] {
  match theater_type {
    "Boutique" => &BOUTIQUE_IMAGES,
    "Single Screen" | "Twin Theaters" => &SINGLE_SCREEN_IMAGES,
    _ => &MULTIPLEX_IMAGES,
  }
}

/// Stock image for `(id, type)`: the pool entry at `id mod pool length`.
pub fn fallback_image(id: u32, theater_type: &str) -> &'static str {
  let pool = fallback_pool(theater_type);
  pool[id as usize % pool.len()]
}

/// What to load after `failed_src` could not be loaded.
///
/// Returns `None` when the fallback is the source that just failed, so a
/// broken stock image is never retried in a loop.
pub fn next_image_source(
  failed_src: &str,
  id: u32,
  theater_type: &str,
) -> Option<&'static str> {
  let fallback = fallback_image(id, theater_type);
  (fallback != failed_src).then_some(fallback)
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Answers whether an image reference can be displayed.
pub trait ImageProbe {
  fn exists(&self, path: &str) -> bool;
}

/// The image a consumer should display for a theater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage {
  Primary(String),
  Fallback(&'static str),
}

impl ResolvedImage {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Primary(path) => path,
      Self::Fallback(url) => url,
    }
  }

  pub fn is_fallback(&self) -> bool { matches!(self, Self::Fallback(_)) }
}

/// Use the primary image when `probe` can see it, the fallback otherwise.
pub fn resolve_image(theater: &Theater, probe: &impl ImageProbe) -> ResolvedImage {
  if probe.exists(&theater.image) {
    return ResolvedImage::Primary(theater.image.clone());
  }
  match next_image_source(&theater.image, theater.id(), theater.theater_type()) {
    Some(fallback) => {
      tracing::debug!(id = theater.id(), fallback, "primary image missing");
      ResolvedImage::Fallback(fallback)
    }
    None => ResolvedImage::Primary(theater.image.clone()),
  }
}
