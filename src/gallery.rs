//! In-memory image collection backing the listing pages.
//!
//! Stands in for the images table: seeded at startup, sorted and sliced per
//! request. Each page fetch also yields the paging state the view helper
//! renders navigation from.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

use crate::paginator::{PagingState, SortDirection};

#[derive(Debug, Clone, Serialize)]
pub struct Image {
    pub id: Uuid,
    pub name: String,
    pub caption: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Sortable image columns. Unknown keys fall back to `Modified`, the
/// listing's default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSort {
    Name,
    Created,
    #[default]
    Modified,
}

impl ImageSort {
    pub fn parse(key: &str) -> Self {
        match key {
            "name" => Self::Name,
            "created" => Self::Created,
            _ => Self::Modified,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Created => "created",
            Self::Modified => "modified",
        }
    }
}

pub struct GalleryStore {
    images: RwLock<Vec<Image>>,
}

impl GalleryStore {
    /// Build a store with `count` deterministic sample images, oldest first.
    pub fn seeded(count: usize) -> Self {
        let base = Utc::now() - Duration::days(30);
        let images = (0..count)
            .map(|i| {
                let created = base + Duration::minutes(i as i64 * 17);
                Image {
                    id: Uuid::new_v4(),
                    name: format!("img_{:04}.jpg", i + 1),
                    caption: format!("Upload #{}", i + 1),
                    created,
                    modified: created + Duration::minutes(3),
                }
            })
            .collect();
        Self {
            images: RwLock::new(images),
        }
    }

    pub fn len(&self) -> usize {
        self.images.read().len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.images.read().is_empty()
    }

    /// One page of images plus the paging state describing it.
    ///
    /// `sort` is the raw column key from the query string; when present it
    /// is recorded on the paging state so the helper can render active sort
    /// headers. Without it the listing keeps its default order, oldest
    /// modification first.
    pub fn page(
        &self,
        page: u64,
        limit: u64,
        sort: Option<&str>,
        direction: SortDirection,
    ) -> (Vec<Image>, PagingState) {
        let mut items: Vec<Image> = self.images.read().clone();

        let order = sort.map(ImageSort::parse).unwrap_or_default();
        match order {
            ImageSort::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
            ImageSort::Created => items.sort_by_key(|image| image.created),
            ImageSort::Modified => items.sort_by_key(|image| image.modified),
        }
        if sort.is_some() && direction == SortDirection::Desc {
            items.reverse();
        }

        let limit = limit.max(1);
        let mut state = PagingState::compute(page, limit, items.len() as u64);
        if let Some(key) = sort {
            state = state.with_sort(key, direction);
        }

        let offset = ((state.page - 1) * limit) as usize;
        let page_items = items
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();
        (page_items, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_slices_and_reports_state() {
        let store = GalleryStore::seeded(25);
        let (items, state) = store.page(2, 10, None, SortDirection::Asc);
        assert_eq!(items.len(), 10);
        assert_eq!(state.page, 2);
        assert_eq!(state.page_count, 3);
        assert_eq!(state.count, 25);
        assert_eq!(state.current, 10);
        assert!(state.sort.is_none());
    }

    #[test]
    fn last_page_is_short() {
        let store = GalleryStore::seeded(25);
        let (items, state) = store.page(3, 10, None, SortDirection::Asc);
        assert_eq!(items.len(), 5);
        assert!(!state.has_next);
    }

    #[test]
    fn sorted_page_records_sort_key() {
        let store = GalleryStore::seeded(25);
        let (items, state) = store.page(1, 10, Some("name"), SortDirection::Desc);
        assert_eq!(state.sort.as_deref(), Some("name"));
        assert_eq!(state.direction, SortDirection::Desc);
        assert_eq!(items[0].name, "img_0025.jpg");
    }

    #[test]
    fn default_order_is_oldest_modified_first() {
        let store = GalleryStore::seeded(5);
        let (items, _) = store.page(1, 10, None, SortDirection::Asc);
        assert!(items.windows(2).all(|w| w[0].modified <= w[1].modified));
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let store = GalleryStore::seeded(25);
        let (items, state) = store.page(9, 10, None, SortDirection::Asc);
        assert!(items.is_empty());
        assert_eq!(state.current, 0);
        assert!(state.validate().is_err());
    }
}
