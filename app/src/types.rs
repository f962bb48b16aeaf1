//! Frontend type definitions
//!
//! Re-exports the shared settings schema and adds frontend-only helpers.

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports from mascot-types (shared with backend)
// ─────────────────────────────────────────────────────────────────────────────

pub use mascot_types::{
    ANIMATION_SPEED_RANGE_MS, DEFAULT_SETTINGS, ImagePaths, OPACITY_RANGE, Settings,
};

/// File extensions offered in the image picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg", "webp"];

// ─────────────────────────────────────────────────────────────────────────────
// Image Slots
// ─────────────────────────────────────────────────────────────────────────────

/// One of the three mascot animation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Typing1,
    Typing2,
    Idle,
}

impl ImageSlot {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            ImageSlot::Typing1 => "Typing (frame 1)",
            ImageSlot::Typing2 => "Typing (frame 2)",
            ImageSlot::Idle => "Idle",
        }
    }

    /// All slots in display order
    pub fn all() -> &'static [ImageSlot] {
        &[ImageSlot::Typing1, ImageSlot::Typing2, ImageSlot::Idle]
    }

    pub fn get<'a>(&self, images: &'a ImagePaths) -> &'a str {
        match self {
            ImageSlot::Typing1 => &images.typing1,
            ImageSlot::Typing2 => &images.typing2,
            ImageSlot::Idle => &images.idle,
        }
    }

    pub fn get_mut<'a>(&self, images: &'a mut ImagePaths) -> &'a mut String {
        match self {
            ImageSlot::Typing1 => &mut images.typing1,
            ImageSlot::Typing2 => &mut images.typing2,
            ImageSlot::Idle => &mut images.idle,
        }
    }
}
