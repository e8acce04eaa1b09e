//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique (prevents domain collision)
//! 3. All domains are null-terminated and follow `TRAVERSE::*::V1\0`
//! 4. No raw `TRAVERSE::` domain literals in production source outside `hash_domain.rs`
//! 5. Domain separation changes the digest of identical bytes

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use traverse_kernel::proof::hash::canonical_hash;
use traverse_kernel::proof::hash_domain::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        5,
        "expected 5 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.ends_with(&[0]), "{domain} is not null-terminated");
        assert!(
            bytes.starts_with(b"TRAVERSE::"),
            "{domain} does not start with TRAVERSE::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
    }
}

#[test]
fn same_bytes_hash_differently_per_domain() {
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|d| canonical_hash(*d, b"{}").as_str().to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}

/// The only file allowed to spell out a domain prefix is `hash_domain.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let pattern = "b\"TRAVERSE::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();
    let mut scanned = 0;

    for crate_dir in ["kernel", "search", "harness"] {
        for path in rs_files(&root.join(crate_dir).join("src")) {
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            scanned += 1;
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if !trimmed.starts_with("//") && trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
                }
            }
        }
    }

    assert!(scanned > 0, "no source files found under {}", root.display());
    assert!(
        violations.is_empty(),
        "raw TRAVERSE:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

fn rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(rs_files(&path));
            } else if path.extension().is_some_and(|e| e == "rs") {
                results.push(path);
            }
        }
    }
    results
}
