use super::*;

mod matches {
    use super::*;

    #[test]
    fn should_return_true_when_origin_and_pattern_identical_then_match_every_component() {
        assert_eq!(matches("https://example.com", "https://example.com"), Ok(true));
    }

    #[test]
    fn should_return_true_when_pattern_is_bare_wildcard_then_skip_pattern_parsing() {
        assert_eq!(matches("custom://example.com:54232", "*"), Ok(true));
    }

    #[test]
    fn should_return_true_when_pattern_spells_out_the_wildcard_then_short_circuit_the_same_way() {
        assert_eq!(matches("custom://example.com:54232", "*://*:*"), Ok(true));
    }

    #[test]
    fn should_return_true_when_either_side_omits_the_port_then_apply_known_defaults() {
        assert_eq!(matches("https://example.com:443", "https://example.com"), Ok(true));
        assert_eq!(matches("https://example.com", "https://example.com:443"), Ok(true));
    }

    #[test]
    fn should_return_false_when_hosts_differ_then_reject_the_pair() {
        assert_eq!(matches("https://example.com", "https://example.dev"), Ok(false));
    }

    #[test]
    fn should_fail_when_origin_unparsable_then_report_invalid_origin() {
        let err = matches("abcdef", "*").unwrap_err();

        assert!(matches!(err, MatchError::InvalidOrigin(_)));
    }

    #[test]
    fn should_fail_when_origin_contains_wildcard_then_report_invalid_origin() {
        let err = matches("*://example.com", "https://example.com").unwrap_err();

        assert!(matches!(err, MatchError::InvalidOrigin(_)));
    }

    #[test]
    fn should_fail_when_pattern_empty_then_report_empty_pattern() {
        assert_eq!(
            matches("https://example.com", "").unwrap_err(),
            MatchError::EmptyPattern
        );
    }

    #[test]
    fn should_fail_when_origin_and_pattern_both_invalid_then_report_the_origin_first() {
        let err = matches("abcdef", "").unwrap_err();

        assert!(matches!(err, MatchError::InvalidOrigin(_)));
    }

    #[test]
    fn should_fail_when_pattern_malformed_then_report_invalid_pattern() {
        let err = matches("https://example.com", "example.com").unwrap_err();

        assert_eq!(
            err,
            MatchError::InvalidPattern(PatternError::MissingSeparator)
        );
    }
}

mod match_any {
    use super::*;

    #[test]
    fn should_return_false_when_origin_empty_then_skip_the_list_entirely() {
        assert_eq!(match_any("", ["*"]), Ok(false));
    }

    #[test]
    fn should_return_false_when_origin_empty_then_never_parse_the_patterns() {
        assert_eq!(match_any("", ["not a pattern"]), Ok(false));
    }

    #[test]
    fn should_return_true_when_any_entry_matches_then_stop_at_the_first_hit() {
        let patterns = ["https://example.dev", "https://example.com"];

        assert_eq!(match_any("https://example.com", patterns), Ok(true));
    }

    #[test]
    fn should_return_false_when_no_entry_matches_then_scan_the_whole_list() {
        let patterns = ["https://example.dev", "https://example.org"];

        assert_eq!(match_any("https://example.com", patterns), Ok(false));
    }

    #[test]
    fn should_return_false_when_list_empty_then_treat_the_origin_as_untrusted() {
        let patterns: [&str; 0] = [];

        assert_eq!(match_any("https://example.com", patterns), Ok(false));
    }

    #[test]
    fn should_fail_when_any_entry_malformed_then_abort_at_the_first_bad_pattern() {
        let patterns = ["example.com", "https://example.com"];
        let err = match_any("https://example.com", patterns).unwrap_err();

        assert_eq!(
            err,
            MatchError::InvalidPattern(PatternError::MissingSeparator)
        );
    }

    #[test]
    fn should_fail_when_origin_unparsable_then_report_invalid_origin() {
        let err = match_any("abcdef", ["*"]).unwrap_err();

        assert!(matches!(err, MatchError::InvalidOrigin(_)));
    }

    #[test]
    fn should_accept_owned_strings_when_list_built_at_runtime_then_match_as_usual() {
        let patterns = vec!["https://example.com".to_owned()];

        assert_eq!(match_any("https://example.com", patterns), Ok(true));
    }
}
