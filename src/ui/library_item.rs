use crate::models::LibraryItem;
use std::sync::Arc;
use tracing::debug;

/// Write-only surface of one grid cell. The toolkit adapter implements
/// this; the presenter never sees the real widget.
pub trait ItemCell {
    fn set_title(&mut self, title: &str);
    fn set_year(&mut self, year: Option<u32>);
    fn set_size(&mut self, size: &str);
    fn set_artwork(&mut self, artwork: Option<&str>);
    fn clear(&mut self);
}

type PresentedCallback = Box<dyn Fn(&LibraryItem) + Send>;

/// Binds one library item snapshot to a cell.
///
/// Cells are recycled across rows, so `bind` must fully replace whatever
/// the cell showed before: every visible field is written from the new
/// snapshot, never merged with the old one. The presenter references the
/// item for the duration of a binding; it owns neither the item nor any
/// navigation logic.
pub struct LibraryItemPresenter<C: ItemCell> {
    cell: C,
    item: Option<Arc<LibraryItem>>,
    on_presented: Option<PresentedCallback>,
}

impl<C: ItemCell> LibraryItemPresenter<C> {
    pub fn new(cell: C) -> Self {
        Self {
            cell,
            item: None,
            on_presented: None,
        }
    }

    /// Replace all displayed fields from the item's snapshot.
    pub fn bind(&mut self, item: Arc<LibraryItem>) {
        self.cell.set_title(&item.title);
        self.cell.set_year(item.year);
        self.cell.set_size(&item.formatted_size());
        self.cell.set_artwork(item.artwork.as_deref());
        self.item = Some(item);
    }

    /// Clear the cell and release the item reference. Idempotent.
    pub fn unbind(&mut self) {
        if self.item.take().is_some() {
            self.cell.clear();
        }
    }

    pub fn item(&self) -> Option<&LibraryItem> {
        self.item.as_deref()
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Register the secondary-interaction hook; the containing grid
    /// reacts (e.g. opens an info popover), not the presenter.
    pub fn on_presented(&mut self, callback: impl Fn(&LibraryItem) + Send + 'static) {
        self.on_presented = Some(Box::new(callback));
    }

    /// The cell's secondary control was triggered.
    pub fn notify_presented(&self) {
        match (&self.item, &self.on_presented) {
            (Some(item), Some(callback)) => callback(item),
            _ => debug!("presented with no bound item or no hook, ignoring"),
        }
    }
}
