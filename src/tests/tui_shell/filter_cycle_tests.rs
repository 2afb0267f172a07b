    use super::*;

    #[test]
    fn cycle_walks_values_then_wraps_to_all() {
        let mut f = CyclicFilter::status();
        assert_eq!(f.value(), FILTER_ALL);
        assert_eq!(f.cycle(), "draft");
        assert_eq!(f.cycle(), "published");
        assert_eq!(f.cycle(), FILTER_ALL);
        assert_eq!(f.cycle(), "draft");
    }

    #[test]
    fn set_from_aligns_with_typed_filter() {
        let mut f = CyclicFilter::status();
        f.set_from("published");
        assert_eq!(f.value(), "published");
        // Next press continues from the synced position.
        assert_eq!(f.cycle(), FILTER_ALL);
    }

    #[test]
    fn set_from_unknown_value_clears_selection() {
        let mut f = CyclicFilter::status();
        f.set_from("draft");
        f.set_from("archived");
        assert_eq!(f.value(), FILTER_ALL);
    }

    #[test]
    fn reset_returns_to_all() {
        let mut f = CyclicFilter::subscriber_status();
        assert_eq!(f.cycle(), "subscribed");
        f.reset();
        assert_eq!(f.value(), FILTER_ALL);
    }
