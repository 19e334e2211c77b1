//! Item containers.
//!
//! Containers are shared by reference (`Arc<ItemContainer>`) between the
//! vehicle that owns them and whoever has them open, so identity matters
//! more than contents: two containers holding the same items are still
//! different containers.

use parking_lot::RwLock;
use quarry_core::{QuarryError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u16,
    pub amount: u8,
    pub quality: u8,
}

impl Item {
    #[must_use]
    pub fn new(id: u16, amount: u8, quality: u8) -> Self {
        Self { id, amount, quality }
    }
}

/// Items stored on one inventory page, at most one per slot of a
/// `width` x `height` page.
#[derive(Debug)]
pub struct ItemContainer {
    page: u8,
    width: u8,
    height: u8,
    items: RwLock<Vec<Item>>,
}

impl ItemContainer {
    #[must_use]
    pub fn new(page: u8, width: u8, height: u8) -> Self {
        Self {
            page,
            width,
            height,
            items: RwLock::new(Vec::new()),
        }
    }

    #[inline]
    #[must_use]
    pub fn page(&self) -> u8 {
        self.page
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Snapshot of the stored items in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// Stores `item`, returning its index.
    pub fn add(&self, item: Item) -> Result<usize> {
        let mut items = self.items.write();
        if items.len() >= self.capacity() {
            return Err(QuarryError::ContainerFull { page: self.page });
        }
        items.push(item);
        Ok(items.len() - 1)
    }

    /// Removes the item at `index`, shifting later items down.
    pub fn remove(&self, index: usize) -> Option<Item> {
        let mut items = self.items.write();
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }
}
