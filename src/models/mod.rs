mod identifiers;

pub use identifiers::{LibraryItemId, WindowId};

use serde::{Deserialize, Serialize};

/// One entry of the media library, as shown in the grid and the play
/// queue. Immutable once constructed; the library collaborator owns the
/// item, presenters hold an `Arc` to it for the duration of a binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: LibraryItemId,
    pub title: String,
    pub year: Option<u32>,
    pub size_bytes: u64,
    pub artwork: Option<String>,
}

impl LibraryItem {
    pub fn new(id: impl Into<LibraryItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: None,
            size_bytes: 0,
            artwork: None,
        }
    }

    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    /// Human-readable size for cell labels, e.g. "1.4 GB".
    pub fn formatted_size(&self) -> String {
        const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

        let mut value = self.size_bytes as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }

        if unit == 0 {
            format!("{} {}", self.size_bytes, UNITS[unit])
        } else {
            format!("{:.1} {}", value, UNITS[unit])
        }
    }
}
