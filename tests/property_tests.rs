//! Property-based tests for the reference parser and pattern enforcer.
//!
//! These tests use proptest to verify invariants hold across randomly
//! generated push payloads.

use std::collections::BTreeSet;

use proptest::prelude::*;

use refguard::core::enforce::{enforce, EnforcementResult, MatchPattern, SkipReason};
use refguard::core::refs::extract_branch_names;
use refguard::core::types::BranchName;

/// Strategy for generating plausible branch name characters.
fn branch_name_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
        Just('.'),
        Just('/'),
    ]
}

/// Strategy for generating branch names as they appear in refs.
fn branch_name() -> impl Strategy<Value = String> {
    prop::collection::vec(branch_name_char(), 1..40)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for generating hex object ids.
fn oid() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
        ]),
        40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for a full pre-push protocol line updating the given ref.
fn push_line(local_ref: String) -> impl Strategy<Value = String> {
    (Just(local_ref), oid(), oid())
        .prop_map(|(r, a, b)| format!("{r} {a} {r} {b}"))
}

/// Strategy for a branch-push line, returning both line and name.
fn branch_line() -> impl Strategy<Value = (String, String)> {
    branch_name().prop_flat_map(|name| {
        push_line(format!("refs/heads/{name}"))
            .prop_map(move |line| (line, name.clone()))
    })
}

/// Strategy for a line that pushes something other than a branch.
fn non_branch_line() -> impl Strategy<Value = String> {
    branch_name().prop_flat_map(|name| {
        prop_oneof![
            push_line(format!("refs/tags/{name}")),
            push_line(format!("refs/notes/{name}")),
            push_line("(delete)".to_string()),
        ]
    })
}

proptest! {
    /// Every branch-push line contributes exactly its branch name.
    #[test]
    fn branch_lines_extract_their_names(lines in prop::collection::vec(branch_line(), 0..10)) {
        let expected: BTreeSet<BranchName> = lines
            .iter()
            .map(|(_, name)| BranchName::new(name.clone()).unwrap())
            .collect();
        let payload: Vec<&String> = lines.iter().map(|(line, _)| line).collect();

        prop_assert_eq!(extract_branch_names(payload), expected);
    }

    /// Feeding the payload twice yields the same set as feeding it once.
    #[test]
    fn extraction_is_idempotent(lines in prop::collection::vec(branch_line(), 0..10)) {
        let once: Vec<&String> = lines.iter().map(|(line, _)| line).collect();
        let twice: Vec<&String> = once.iter().chain(once.iter()).copied().collect();

        prop_assert_eq!(extract_branch_names(once), extract_branch_names(twice));
    }

    /// Set membership does not depend on line order.
    #[test]
    fn extraction_is_order_independent(lines in prop::collection::vec(branch_line(), 0..10)) {
        let forward: Vec<&String> = lines.iter().map(|(line, _)| line).collect();
        let reverse: Vec<&String> = forward.iter().rev().copied().collect();

        prop_assert_eq!(extract_branch_names(forward), extract_branch_names(reverse));
    }

    /// Non-branch refs never contribute entries.
    #[test]
    fn non_branch_lines_contribute_nothing(
        branch_lines in prop::collection::vec(branch_line(), 0..6),
        other_lines in prop::collection::vec(non_branch_line(), 0..6),
    ) {
        let just_branches: Vec<&String> =
            branch_lines.iter().map(|(line, _)| line).collect();
        let mixed: Vec<&String> = just_branches
            .iter()
            .copied()
            .chain(other_lines.iter())
            .collect();

        prop_assert_eq!(extract_branch_names(mixed), extract_branch_names(just_branches));
    }

    /// With no pattern, enforcement always skips.
    #[test]
    fn no_pattern_always_skips(names in prop::collection::vec(branch_name(), 0..10)) {
        let branches: BTreeSet<BranchName> = names
            .into_iter()
            .map(|n| BranchName::new(n).unwrap())
            .collect();

        prop_assert_eq!(
            enforce(&branches, None),
            EnforcementResult::Skip(SkipReason::NoPattern)
        );
    }

    /// Pass and Fail exactly reflect a per-name match partition.
    #[test]
    fn fail_carries_exactly_the_violators(names in prop::collection::vec(branch_name(), 1..10)) {
        let pattern = MatchPattern::compile("^[a-z][a-z0-9-]*$").unwrap();
        let branches: BTreeSet<BranchName> = names
            .into_iter()
            .map(|n| BranchName::new(n).unwrap())
            .collect();
        let expected: Vec<BranchName> = branches
            .iter()
            .filter(|b| !pattern.is_match(b))
            .cloned()
            .collect();

        match enforce(&branches, Some(&pattern)) {
            EnforcementResult::Pass => prop_assert!(expected.is_empty()),
            EnforcementResult::Fail { violations, .. } => {
                prop_assert_eq!(violations, expected);
            }
            EnforcementResult::Skip(_) => prop_assert!(false, "non-empty set never skips"),
        }
    }
}
