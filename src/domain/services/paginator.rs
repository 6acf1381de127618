//! Windowing over an ordered image list.

/// Stateless page arithmetic.
///
/// Every operation is total: out-of-range pages yield empty slices and
/// overflowing offsets saturate instead of panicking.
pub struct Paginator;

impl Paginator {
    /// Number of pages needed to show `len` items, `0` for an empty list.
    #[must_use]
    pub const fn total_pages(len: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        len.div_ceil(page_size)
    }

    /// Items shown on `page`, clipped to the available length.
    #[must_use]
    pub fn visible_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
        let start = page.saturating_mul(page_size).min(items.len());
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    }

    /// Items that would be shown on the page after `page`.
    #[must_use]
    pub fn next_page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
        Self::visible_slice(items, page.saturating_add(1), page_size)
    }

    /// Clamps `page` into `[0, total_pages - 1]`, or `0` when there are no pages.
    #[must_use]
    pub const fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
        let total = Self::total_pages(len, page_size);
        if total == 0 {
            0
        } else if page >= total {
            total - 1
        } else {
            page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 6, 0 ; "empty")]
    #[test_case(1, 6, 1 ; "single item")]
    #[test_case(6, 6, 1 ; "exactly one page")]
    #[test_case(7, 6, 2 ; "one over")]
    #[test_case(8, 6, 2 ; "animals scenario")]
    #[test_case(25, 4, 7 ; "uneven")]
    fn test_total_pages(len: usize, page_size: usize, expected: usize) {
        assert_eq!(Paginator::total_pages(len, page_size), expected);
    }

    #[test]
    fn test_eight_records_page_size_six() {
        let items: Vec<usize> = (0..8).collect();

        assert_eq!(Paginator::visible_slice(&items, 0, 6), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(Paginator::visible_slice(&items, 1, 6), &[6, 7]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<usize> = (0..8).collect();

        assert!(Paginator::visible_slice(&items, 2, 6).is_empty());
        assert!(Paginator::visible_slice(&items, usize::MAX, 6).is_empty());
        assert!(Paginator::visible_slice::<usize>(&[], 0, 6).is_empty());
    }

    #[test]
    fn test_slices_cover_every_item_once() {
        for len in 0..40 {
            for page_size in 1..9 {
                let items: Vec<usize> = (0..len).collect();
                let pages = Paginator::total_pages(len, page_size);
                let shown: Vec<usize> = (0..pages)
                    .flat_map(|page| Paginator::visible_slice(&items, page, page_size).to_vec())
                    .collect();

                assert_eq!(shown, items, "len={len} page_size={page_size}");
            }
        }
    }

    #[test]
    fn test_next_page_slice() {
        let items: Vec<usize> = (0..8).collect();

        assert_eq!(Paginator::next_page_slice(&items, 0, 6), &[6, 7]);
        assert!(Paginator::next_page_slice(&items, 1, 6).is_empty());
    }

    #[test_case(0, 8, 6, 0 ; "first page")]
    #[test_case(1, 8, 6, 1 ; "last page")]
    #[test_case(9, 8, 6, 1 ; "past the end")]
    #[test_case(3, 0, 6, 0 ; "empty list")]
    fn test_clamp_page(page: usize, len: usize, page_size: usize, expected: usize) {
        assert_eq!(Paginator::clamp_page(page, len, page_size), expected);
    }
}
