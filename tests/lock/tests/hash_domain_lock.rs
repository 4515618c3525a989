//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated
//! 4. All domains follow the `COMBSEARCH::*::V1\0` naming convention

use std::collections::BTreeSet;

use combsearch_search::digest::{canonical_hash, HashDomain};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        2,
        "expected 2 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain:?}"
        );
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain:?} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let text = std::str::from_utf8(domain.as_bytes()).unwrap();
        assert!(text.starts_with("COMBSEARCH::"), "{domain:?}: {text:?}");
        assert!(text.ends_with("::V1\0"), "{domain:?}: {text:?}");
    }
}

#[test]
fn same_data_different_domain_different_hash() {
    let a = canonical_hash(HashDomain::SolutionSet, b"[]");
    let b = canonical_hash(HashDomain::SearchReport, b"[]");
    assert_ne!(a, b);
    assert_eq!(a.algorithm(), "sha256");
    assert_eq!(a.hex_digest().len(), 64);
}
