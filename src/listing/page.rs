use serde::Serialize;

/// One committed page of results plus paging derived from `total`.
///
/// `has_next`/`has_prev` are always computed here from the requested page and
/// the reported total, never taken from a response body.
#[derive(Clone, Debug, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> ListPage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }

    pub fn compute(items: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = total_pages_for(total, page_size);
        Self {
            items,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

pub fn total_pages_for(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size)) as u32
}

#[cfg(test)]
#[path = "../tests/listing/page_tests.rs"]
mod tests;
