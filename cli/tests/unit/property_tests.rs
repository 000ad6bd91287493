//! Property-based tests for the pure parsers and validators.

use proptest::prelude::*;
use rhdh_common::ConfigurationType;
use rhdh_local::domain::compose::parse_ps_output;
use rhdh_local::domain::configuration::validate;
use rhdh_local::domain::git::parse_porcelain_v2;
use rhdh_local::domain::installation::version_at_least;

proptest! {
    /// `ps` output of any shape never panics the parser.
    #[test]
    fn parse_ps_output_never_panics(s in ".*") {
        let _ = parse_ps_output(&s, 1_700_000_000);
    }

    #[test]
    fn parse_porcelain_never_panics(s in ".*") {
        let _ = parse_porcelain_v2(&s);
    }

    /// A report is valid exactly when it has no errors.
    #[test]
    fn validation_report_is_consistent(s in ".*", idx in 0usize..5) {
        let report = validate(ConfigurationType::ALL[idx], &s);
        prop_assert_eq!(report.valid, report.errors.is_empty());
    }

    /// Well-formed env lines are always accepted.
    #[test]
    fn generated_env_files_are_valid(
        keys in prop::collection::btree_set("[A-Z_][A-Z0-9_]{0,12}", 0..8),
        value in "[a-zA-Z0-9:/._-]{0,20}",
    ) {
        let content: String = keys.iter().map(|k| format!("{k}={value}\n")).collect();
        let report = validate(ConfigurationType::Env, &content);
        prop_assert!(report.valid, "{:?}", report.errors);
    }

    #[test]
    fn version_at_least_is_reflexive(a in 0u64..50, b in 0u64..50, c in 0u64..50) {
        let v = format!("{a}.{b}.{c}");
        prop_assert!(version_at_least(&v, &v));
    }
}
