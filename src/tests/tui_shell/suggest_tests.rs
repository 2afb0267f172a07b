    use super::*;

    fn def(name: &'static str, aliases: &'static [&'static str]) -> CommandDef {
        CommandDef {
            name,
            aliases,
            usage: "",
            help: "",
        }
    }

    #[test]
    fn exact_beats_prefix_beats_substring() {
        assert!(score_match("posts", "posts") > score_match("po", "posts"));
        assert!(score_match("po", "posts") > score_match("age", "page"));
        assert_eq!(score_match("zz", "posts"), 0);
    }

    #[test]
    fn shorter_prefix_candidate_ranks_higher() {
        // "s" matches both; the shorter command should score better.
        assert!(score_match("s", "search") > score_match("s", "subscribers"));
    }

    #[test]
    fn score_match_ignores_case() {
        assert_eq!(score_match("REFRESH", "refresh"), 100);
    }

    #[test]
    fn hinted_commands_outrank_better_score() {
        let mut scored = vec![(100, def("help", &["h"])), (44, def("export", &[]))];
        sort_scored_suggestions(&mut scored, &["refresh".to_string(), "export".to_string()]);
        assert_eq!(scored[0].1.name, "export");
    }

    #[test]
    fn hint_matches_through_alias() {
        let mut scored = vec![(80, def("search", &[])), (60, def("refresh", &["r"]))];
        sort_scored_suggestions(&mut scored, &["r".to_string()]);
        assert_eq!(scored[0].1.name, "refresh");
    }

    #[test]
    fn non_hinted_suggestions_keep_score_order() {
        let mut scored = vec![(10, def("page", &[])), (20, def("next", &[]))];
        sort_scored_suggestions(&mut scored, &[]);
        assert_eq!(scored[0].1.name, "next");
    }

    #[test]
    fn ties_fall_back_to_name_order() {
        let mut scored = vec![(10, def("team", &[])), (10, def("prev", &[]))];
        sort_scored_suggestions(&mut scored, &[]);
        assert_eq!(scored[0].1.name, "prev");
        assert_eq!(scored[1].1.name, "team");
    }
