    use super::*;

    use crate::model::PublishStatus;

    fn valid_post() -> PostInput {
        PostInput {
            title: "A fine title".to_string(),
            slug: "a-fine-title".to_string(),
            excerpt: "Short summary".to_string(),
            content: "Body text".to_string(),
            cover_url: Some("https://cdn.example.com/c.png".to_string()),
            tags: vec!["news".to_string()],
            status: PublishStatus::Published,
            featured: false,
        }
    }

    fn fields(issues: &[FieldIssue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.field).collect()
    }

    #[test]
    fn valid_post_has_no_issues() {
        assert!(validate_post(&valid_post()).is_empty());
    }

    #[test]
    fn required_post_fields_are_each_reported() {
        let empty = PostInput::default();
        let got = fields(&validate_post(&empty));
        assert_eq!(got, vec!["title", "slug", "excerpt", "content"]);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut input = valid_post();
        input.title = "   ".to_string();
        assert_eq!(fields(&validate_post(&input)), vec!["title"]);
    }

    #[test]
    fn slug_charset_is_enforced() {
        let mut input = valid_post();
        input.slug = "Hello World".to_string();
        assert_eq!(fields(&validate_post(&input)), vec!["slug"]);

        input.slug = "hello-world-2".to_string();
        assert!(validate_post(&input).is_empty());
    }

    #[test]
    fn length_caps_are_enforced() {
        let mut input = valid_post();
        input.title = "x".repeat(TITLE_MAX + 1);
        assert_eq!(fields(&validate_post(&input)), vec!["title"]);

        let mut input = valid_post();
        input.slug = "a".repeat(SLUG_MAX + 1);
        assert_eq!(fields(&validate_post(&input)), vec!["slug"]);

        let mut input = valid_post();
        input.excerpt = "x".repeat(EXCERPT_MAX + 1);
        assert_eq!(fields(&validate_post(&input)), vec!["excerpt"]);
    }

    #[test]
    fn cover_url_must_be_absolute_http() {
        let mut input = valid_post();
        input.cover_url = Some("ftp://example.com/x.png".to_string());
        assert_eq!(fields(&validate_post(&input)), vec!["coverUrl"]);

        input.cover_url = Some("/relative/path.png".to_string());
        assert_eq!(fields(&validate_post(&input)), vec!["coverUrl"]);

        // Empty means "no cover", which is fine.
        input.cover_url = Some(String::new());
        assert!(validate_post(&input).is_empty());
        input.cover_url = None;
        assert!(validate_post(&input).is_empty());
    }

    #[test]
    fn story_requires_title_client_summary() {
        let empty = StoryInput::default();
        assert_eq!(fields(&validate_story(&empty)), vec!["title", "client", "summary"]);

        let ok = StoryInput {
            title: "Rebuild".to_string(),
            client: "Acme".to_string(),
            summary: "A rebuild".to_string(),
            ..StoryInput::default()
        };
        assert!(validate_story(&ok).is_empty());
    }

    #[test]
    fn team_member_requires_name_and_role() {
        let empty = TeamMemberInput::default();
        assert_eq!(fields(&validate_team_member(&empty)), vec!["name", "role"]);

        let ok = TeamMemberInput {
            name: "Sam".to_string(),
            role: "Engineer".to_string(),
            ..TeamMemberInput::default()
        };
        assert!(validate_team_member(&ok).is_empty());
    }

    #[test]
    fn url_helper_accepts_both_schemes() {
        assert!(is_http_url("http://example.com"));
        assert!(is_http_url("https://example.com/a/b"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("example.com"));
    }
