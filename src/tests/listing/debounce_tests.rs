    use super::*;

    #[test]
    fn fires_once_at_the_deadline() {
        let t0 = Instant::now();
        let mut d = Debounce::new(Duration::from_millis(300));

        assert!(!d.fire(t0));
        d.arm(t0);
        assert!(d.armed());
        assert!(!d.fire(t0 + Duration::from_millis(299)));
        assert!(d.fire(t0 + Duration::from_millis(300)));
        assert!(!d.armed());
        assert!(!d.fire(t0 + Duration::from_millis(301)));
    }

    #[test]
    fn rearming_pushes_the_deadline_out() {
        let t0 = Instant::now();
        let mut d = Debounce::new(Duration::from_millis(300));

        d.arm(t0);
        d.arm(t0 + Duration::from_millis(200));
        assert!(!d.fire(t0 + Duration::from_millis(350)));
        assert!(d.fire(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn disarm_cancels_without_firing() {
        let t0 = Instant::now();
        let mut d = Debounce::new(Duration::from_millis(300));

        d.arm(t0);
        d.disarm();
        assert!(!d.armed());
        assert!(!d.fire(t0 + Duration::from_secs(10)));
    }
