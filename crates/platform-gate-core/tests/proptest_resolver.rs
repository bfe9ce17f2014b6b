// platform-gate-core/tests/proptest_resolver.rs
// ============================================================================
// Module: Resolver Property-Based Tests
// Description: Property tests for token resolution and version matching.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for resolver and evaluator invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use std::str::FromStr;

use platform_gate_core::FrameworkVersion;
use platform_gate_core::PlatformEvaluator;
use platform_gate_core::runtime::resolver;
use proptest::prelude::*;
use support::environments;

/// Strategy producing token-shaped strings, valid and invalid alike.
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9.\\-]{0,16}",
        ".*",
        Just("WIN".to_string()),
        Just("NET-4.5".to_string()),
        Just("NET-".to_string()),
    ]
}

proptest! {
    #[test]
    fn resolver_never_panics_on_arbitrary_tokens(token in token_strategy()) {
        let environment = environments::windows7();
        let _ = resolver::resolve_token(&token, &environment);
    }

    #[test]
    fn evaluator_fails_closed_on_arbitrary_specifications(specification in ".*") {
        let mut evaluator = PlatformEvaluator::with_environment(environments::linux());
        let verdict = evaluator.is_supported(Some(specification.as_str()), None);
        if !verdict {
            prop_assert!(!evaluator.reason().is_empty());
        }
    }

    #[test]
    fn vocabulary_constants_always_classify(index in 0usize .. 64) {
        let os_tokens: Vec<&str> = resolver::OS_PLATFORMS.split(',').collect();
        let runtime_tokens: Vec<&str> = resolver::RUNTIME_PLATFORMS.split(',').collect();
        let token = if index < os_tokens.len() {
            os_tokens[index]
        } else {
            runtime_tokens[index % runtime_tokens.len()]
        };
        prop_assert!(resolver::classify(token).is_ok());
    }

    #[test]
    fn version_display_round_trips(components in prop::collection::vec(0u32 .. 1000, 1 ..= 4)) {
        let version = FrameworkVersion::from_parts(&components);
        let reparsed = FrameworkVersion::from_str(&version.to_string()).unwrap();
        prop_assert_eq!(reparsed, version);
    }

    #[test]
    fn dropping_target_precision_widens_the_match(
        current in prop::collection::vec(0u32 .. 20, 1 ..= 4),
        target in prop::collection::vec(0u32 .. 20, 1 ..= 4),
    ) {
        let current = FrameworkVersion::from_parts(&current);
        let full = FrameworkVersion::from_parts(&target);
        if current.satisfies(&full) {
            for precision in 1 .. target.len() {
                let truncated = FrameworkVersion::from_parts(&target[.. precision]);
                prop_assert!(current.satisfies(&truncated));
            }
        }
    }

    #[test]
    fn unspecified_target_matches_everything(components in prop::collection::vec(0u32 .. 1000, 0 ..= 4)) {
        let current = FrameworkVersion::from_parts(&components);
        prop_assert!(current.satisfies(&FrameworkVersion::UNSPECIFIED));
    }
}
