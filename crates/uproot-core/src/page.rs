use crate::{PAGE_SIZE, collector::EntityGroup, error::PageError};
use serde::Serialize;

///
/// Paged
///
/// Fixed-page-size window over per-entity groups: one page item per
/// referencing entity, up to [`PAGE_SIZE`] items per page, pages numbered
/// from 1. An empty grouped result has zero pages.
///

#[derive(Clone, Copy, Debug)]
pub struct Paged<'a> {
    entries: &'a [EntityGroup],
    per_page: u32,
}

impl<'a> Paged<'a> {
    #[must_use]
    pub(crate) const fn new(entries: &'a [EntityGroup]) -> Self {
        Self {
            entries,
            per_page: PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.entries.len() as u64
    }

    #[must_use]
    pub const fn num_pages(&self) -> u32 {
        (self.entries.len() as u64).div_ceil(self.per_page as u64) as u32
    }

    /// Page `number`, 1-based.
    pub fn page(&self, number: u32) -> Result<Page<'a>, PageError> {
        let pages = self.num_pages();
        if number == 0 || number > pages {
            return Err(PageError::OutOfRange { number, pages });
        }

        let start = ((number - 1) * self.per_page) as usize;
        let end = usize::min(start + self.per_page as usize, self.entries.len());

        Ok(Page {
            number,
            pages,
            items: &self.entries[start..end],
        })
    }

    /// Iterate pages in order.
    pub fn pages(&self) -> impl Iterator<Item = Page<'a>> + '_ {
        (1..=self.num_pages()).map(|number| self.page(number).expect("page number is within range"))
    }
}

///
/// Page
///
/// One page of the preview: up to [`PAGE_SIZE`] (entity, policy-grouped
/// records) items.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Page<'a> {
    number: u32,
    pages: u32,
    items: &'a [EntityGroup],
}

impl<'a> Page<'a> {
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub const fn items(&self) -> &'a [EntityGroup] {
        self.items
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.pages
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }
}
