    use super::*;

    use crate::listing::{ADMIN_PAGE_SIZE, GALLERY_PAGE_SIZE};

    #[test]
    fn total_pages_round_up() {
        assert_eq!(total_pages_for(0, ADMIN_PAGE_SIZE), 0);
        assert_eq!(total_pages_for(1, ADMIN_PAGE_SIZE), 1);
        assert_eq!(total_pages_for(10, ADMIN_PAGE_SIZE), 1);
        assert_eq!(total_pages_for(11, ADMIN_PAGE_SIZE), 2);
        assert_eq!(total_pages_for(23, ADMIN_PAGE_SIZE), 3);
        assert_eq!(total_pages_for(23, GALLERY_PAGE_SIZE), 4);
    }

    #[test]
    fn zero_page_size_never_divides() {
        assert_eq!(total_pages_for(23, 0), 0);
    }

    #[test]
    fn neighbor_flags_follow_the_requested_page() {
        let middle = ListPage::compute(vec![0u32; 10], 23, 2, ADMIN_PAGE_SIZE);
        assert!(middle.has_next);
        assert!(middle.has_prev);

        let last = ListPage::compute(vec![0u32; 3], 23, 3, ADMIN_PAGE_SIZE);
        assert!(!last.has_next);
        assert!(last.has_prev);

        let only = ListPage::compute(vec![0u32; 5], 5, 1, ADMIN_PAGE_SIZE);
        assert!(!only.has_next);
        assert!(!only.has_prev);
    }

    #[test]
    fn empty_page_is_all_zeroes() {
        let page = ListPage::<u32>::empty();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }
