    use super::*;

    fn envelope(items: Vec<u32>, total: u64) -> ListEnvelope<u32> {
        ListEnvelope {
            items,
            total,
            page: 0,
        }
    }

    fn committed(total: u64) -> ListController<u32> {
        let mut c = ListController::new(ADMIN_PAGE_SIZE);
        let spec = c.refresh();
        let count = total.min(u64::from(ADMIN_PAGE_SIZE)) as u32;
        assert!(c.commit(spec.seq, Ok(envelope((0..count).collect(), total))));
        c
    }

    #[test]
    fn bursty_search_input_produces_one_fetch_with_final_text() {
        let t0 = Instant::now();
        let mut c = ListController::<u32>::new(ADMIN_PAGE_SIZE);

        c.set_search("a", t0);
        c.set_search("ab", t0 + Duration::from_millis(50));
        c.set_search("abc", t0 + Duration::from_millis(100));

        // 300ms after the *last* keystroke, not the first.
        assert!(c.poll(t0 + Duration::from_millis(350)).is_none());

        let spec = c.poll(t0 + Duration::from_millis(400)).expect("debounce elapsed");
        assert_eq!(spec.query.search, "abc");
        assert_eq!(spec.query.page, 1);
        assert!(c.loading());

        assert!(c.poll(t0 + Duration::from_millis(450)).is_none());
    }

    #[test]
    fn paging_flags_come_from_total_not_the_server() {
        let mut c = committed(23);
        assert_eq!(c.total_pages(), 3);
        assert_eq!(c.len(), 10);
        assert!(c.has_next());
        assert!(!c.has_prev());

        let spec = c.go_to_page(3).expect("page 3 is in range");
        assert_eq!(spec.query.page, 3);
        assert!(c.commit(spec.seq, Ok(envelope(vec![20, 21, 22], 23))));
        assert!(!c.has_next());
        assert!(c.has_prev());
    }

    #[test]
    fn single_page_has_neither_neighbor() {
        let mut c = ListController::<u32>::new(ADMIN_PAGE_SIZE);
        let spec = c.refresh();
        assert!(c.commit(spec.seq, Ok(envelope(vec![1], 1))));
        assert_eq!(c.total_pages(), 1);
        assert!(!c.has_next());
        assert!(!c.has_prev());
    }

    #[test]
    fn search_and_filter_changes_reset_to_page_one() {
        let mut c = committed(23);
        let spec = c.go_to_page(2).expect("page 2 is in range");
        assert!(c.commit(spec.seq, Ok(envelope((10..20).collect(), 23))));
        assert_eq!(c.page(), 2);

        let spec = c.set_filter("status", "published");
        assert_eq!(spec.query.page, 1);
        assert_eq!(spec.query.filters.get("status").map(String::as_str), Some("published"));

        let mut c = committed(23);
        let spec = c.go_to_page(2).expect("page 2 is in range");
        assert!(c.commit(spec.seq, Ok(envelope((10..20).collect(), 23))));
        let t0 = Instant::now();
        c.set_search("rust", t0);
        let spec = c.poll(t0 + SEARCH_DEBOUNCE).expect("debounce elapsed");
        assert_eq!(spec.query.page, 1);
    }

    #[test]
    fn out_of_range_or_in_flight_page_moves_are_ignored() {
        let mut c = committed(23);
        assert!(c.go_to_page(0).is_none());
        assert!(c.go_to_page(4).is_none());
        assert_eq!(c.page(), 1);

        let _inflight = c.refresh();
        assert!(c.loading());
        assert!(c.go_to_page(2).is_none());
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn prev_from_first_page_is_ignored() {
        let mut c = committed(23);
        assert!(c.prev_page().is_none());
        let spec = c.next_page().expect("page 2 exists");
        assert_eq!(spec.query.page, 2);
    }

    #[test]
    fn failed_fetch_clears_results_and_sets_error() {
        let mut c = committed(23);
        let spec = c.refresh();
        assert!(c.commit(spec.seq, Err("connection refused".to_string())));

        assert!(!c.loading());
        assert_eq!(c.len(), 0);
        assert_eq!(c.total(), 0);
        assert_eq!(c.total_pages(), 0);
        assert!(!c.has_next());
        assert!(!c.has_prev());
        assert_eq!(c.error(), Some("connection refused"));

        // A later successful refresh recovers and clears the error.
        let spec = c.refresh();
        assert!(c.commit(spec.seq, Ok(envelope((0..10).collect(), 23))));
        assert!(c.error().is_none());
        assert_eq!(c.total(), 23);
    }

    #[test]
    fn stale_completion_is_discarded_whole() {
        let mut c = ListController::<u32>::new(ADMIN_PAGE_SIZE);
        let first = c.refresh();
        let second = c.refresh();

        // The older fetch resolves first; nothing may change, the newer
        // fetch is still outstanding.
        assert!(!c.commit(first.seq, Ok(envelope(vec![1], 1))));
        assert!(c.loading());
        assert_eq!(c.len(), 0);

        assert!(c.commit(second.seq, Ok(envelope(vec![2, 3], 2))));
        assert_eq!(c.items(), &[2, 3]);
        assert!(!c.loading());

        // Out-of-order the other way round: the newer fetch resolved before
        // the stale one arrives.
        let stale_error = c.refresh();
        let newest = c.refresh();
        assert!(c.commit(newest.seq, Ok(envelope(vec![9], 1))));
        assert!(!c.commit(stale_error.seq, Err("timed out".to_string())));
        assert_eq!(c.items(), &[9]);
        assert!(c.error().is_none());
    }

    #[test]
    fn filter_sentinels_remove_instead_of_matching_literally() {
        let mut c = committed(23);
        let spec = c.set_filter("status", "published");
        assert!(c.commit(spec.seq, Ok(envelope(vec![], 0))));
        assert_eq!(c.filter("status"), Some("published"));

        let spec = c.set_filter("status", "all");
        assert!(c.filter("status").is_none());
        assert!(spec.query.params().iter().all(|(k, _)| k != "status"));
        assert!(c.commit(spec.seq, Ok(envelope(vec![], 0))));

        let spec = c.set_filter("tag", "rust");
        assert!(c.commit(spec.seq, Ok(envelope(vec![], 0))));
        let spec = c.set_filter("tag", "");
        assert!(c.filter("tag").is_none());
        assert!(spec.query.params().iter().all(|(k, _)| k != "tag"));
    }

    #[test]
    fn filter_change_disarms_a_pending_search() {
        let t0 = Instant::now();
        let mut c = ListController::<u32>::new(ADMIN_PAGE_SIZE);
        c.set_search("ab", t0);

        // The immediate filter fetch already carries the new search text, so
        // the debounced fetch would only duplicate it.
        let spec = c.set_filter("status", "draft");
        assert_eq!(spec.query.search, "ab");
        assert!(!c.search_pending());
        assert!(c.poll(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn params_omit_blank_search_and_trim_whitespace() {
        let mut query = ListQuery::first_page(ADMIN_PAGE_SIZE);
        assert_eq!(
            query.params(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );

        query.search = "   ".to_string();
        assert!(query.params().iter().all(|(k, _)| k != "search"));

        query.search = " rust ".to_string();
        assert!(query.params().contains(&("search".to_string(), "rust".to_string())));
    }
