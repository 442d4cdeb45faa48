//! Offset-paginated catalog loading
//!
//! Remote catalogs hand out cards in fixed-size chunks together with the total
//! row count. [`Paginated`] walks such a source lazily, one page per
//! [`Iterator::next`] call, and stops once the total reported by the first
//! page is reached. A source that runs dry early (an empty page) ends the
//! walk instead of looping forever.
//!
//! ```rust
//! use deckcode_catalog::pagination::{Page, PageLoader, Paginated, collect_all};
//! use std::convert::Infallible;
//!
//! struct Numbers(Vec<u32>);
//!
//! impl PageLoader for Numbers {
//!     type Item = u32;
//!     type Error = Infallible;
//!
//!     fn fetch(&mut self, offset: usize, limit: usize) -> Result<Page<u32>, Infallible> {
//!         let end = (offset + limit).min(self.0.len());
//!         let items = self.0.get(offset..end).unwrap_or_default().to_vec();
//!         Ok(Page::new(items, self.0.len()))
//!     }
//! }
//!
//! let all = collect_all(Paginated::new(Numbers((0..10).collect()), 3)).unwrap();
//! assert_eq!(all.len(), 10);
//! ```

use std::iter::{Chain, FusedIterator};

/// Page size used by catalog loaders unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 2000;

/// One chunk of a paginated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in this chunk
    pub items: Vec<T>,
    /// Total rows the source reports across all pages
    pub total_rows: usize,
}

impl<T> Page<T> {
    /// Create a page
    pub const fn new(items: Vec<T>, total_rows: usize) -> Self {
        Self { items, total_rows }
    }
}

/// A source that serves items by offset and limit
pub trait PageLoader {
    /// Item type
    type Item;
    /// Fetch error
    type Error;

    /// Fetch up to `limit` items starting at `offset`
    ///
    /// # Errors
    ///
    /// Implementation-defined; the error ends iteration.
    fn fetch(&mut self, offset: usize, limit: usize) -> Result<Page<Self::Item>, Self::Error>;
}

impl<L: PageLoader + ?Sized> PageLoader for &mut L {
    type Item = L::Item;
    type Error = L::Error;

    fn fetch(&mut self, offset: usize, limit: usize) -> Result<Page<Self::Item>, Self::Error> {
        (**self).fetch(offset, limit)
    }
}

/// Lazy, restartable walk over a [`PageLoader`]
///
/// Yields each page's items. The first error is yielded once and ends the
/// walk; call [`Paginated::restart`] to start over from offset zero.
#[derive(Debug)]
pub struct Paginated<L> {
    loader: L,
    page_size: usize,
    offset: usize,
    fetched: usize,
    total: Option<usize>,
    finished: bool,
}

impl<L: PageLoader> Paginated<L> {
    /// Walk `loader` in chunks of `page_size` (at least one)
    pub fn new(loader: L, page_size: usize) -> Self {
        Self {
            loader,
            page_size: page_size.max(1),
            offset: 0,
            fetched: 0,
            total: None,
            finished: false,
        }
    }

    /// Walk `loader` with [`DEFAULT_PAGE_SIZE`]
    pub fn with_default_page_size(loader: L) -> Self {
        Self::new(loader, DEFAULT_PAGE_SIZE)
    }

    /// Total reported by the first page, once fetched
    pub const fn total_rows(&self) -> Option<usize> {
        self.total
    }

    /// Items yielded so far
    pub const fn fetched(&self) -> usize {
        self.fetched
    }

    /// Forget progress; the next call fetches offset zero again
    pub const fn restart(&mut self) {
        self.offset = 0;
        self.fetched = 0;
        self.total = None;
        self.finished = false;
    }

    /// Continue with `secondary` once this walk is exhausted
    pub fn chain_secondary<S>(self, secondary: Paginated<S>) -> Chain<Self, Paginated<S>>
    where
        S: PageLoader<Item = L::Item, Error = L::Error>,
    {
        self.chain(secondary)
    }

    /// Give back the loader
    pub fn into_loader(self) -> L {
        self.loader
    }
}

impl<L: PageLoader> Iterator for Paginated<L> {
    type Item = Result<Vec<L::Item>, L::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.total.is_some_and(|total| self.fetched >= total) {
            self.finished = true;
            return None;
        }

        let page = match self.loader.fetch(self.offset, self.page_size) {
            Ok(page) => page,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };

        let total = *self.total.get_or_insert(page.total_rows);
        if page.items.is_empty() {
            if self.fetched < total {
                tracing::warn!(
                    fetched = self.fetched,
                    total,
                    "source ran out of items before its reported total"
                );
            }
            self.finished = true;
            return None;
        }

        self.fetched += page.items.len();
        self.offset += self.page_size;
        tracing::debug!(
            offset = self.offset,
            fetched = self.fetched,
            total,
            "fetched catalog page"
        );
        Some(Ok(page.items))
    }
}

impl<L: PageLoader> FusedIterator for Paginated<L> {}

/// Drain a page iterator into one vector, stopping at the first error
///
/// # Errors
///
/// Returns the first error any page produced.
pub fn collect_all<I, T, E>(pages: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<Vec<T>, E>>,
{
    let mut items = Vec::new();
    for page in pages {
        items.extend(page?);
    }
    Ok(items)
}
