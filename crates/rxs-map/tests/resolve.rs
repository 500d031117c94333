//! Integration tests for header resolution.

use proptest::prelude::*;
use rxs_map::{MapError, ResolvedColumn, find_column, normalize_key, require_column};

#[test]
fn spellings_share_a_key() {
    assert_eq!(normalize_key("Tot_Spndng"), normalize_key("Tot Spndng"));
    assert_eq!(normalize_key("Tot Spndng"), normalize_key("TotSpndng"));
}

#[test]
fn resolves_realistic_part_b_headers() {
    let headers = vec![
        "Brnd_Name".to_string(),
        "Gnrc_Name".to_string(),
        "HCPCS_Cd".to_string(),
        "HCPCS_Desc".to_string(),
        "Tot_Spndng_2021".to_string(),
        "Tot_Spndng_2022".to_string(),
        "Tot_Clms_2022".to_string(),
        "Tot_Benes_2022".to_string(),
    ];

    assert_eq!(
        require_column(&headers, "HCPCS_Desc", "Part B", None).unwrap(),
        ResolvedColumn {
            index: 3,
            name: "HCPCS_Desc".to_string()
        }
    );
    assert_eq!(
        require_column(&headers, "Tot_Clms", "Part B", Some(2022))
            .unwrap()
            .index,
        6
    );
    let err = require_column(&headers, "Tot_Clms", "Part B", Some(2021)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Part B: unable to locate column matching 'Tot_Clms_2021' (similar columns: Tot_Clms_2022)"
    );
}

#[test]
fn ambiguity_wins_over_require() {
    let headers = ["Tot_Spndng_2022", "Tot-Spndng-2022-Final"];
    let err = require_column(&headers, "Tot_Spndng", "Part D", Some(2022)).unwrap_err();
    assert!(matches!(err, MapError::AmbiguousColumn { candidates, .. } if candidates.len() == 2));
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[A-Za-z0-9 _-]{0,24}") {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn separators_never_change_the_key(
        word in "[A-Za-z0-9]{1,12}",
        seps in proptest::collection::vec("[ _-]{0,3}", 12),
    ) {
        let mut spaced = String::new();
        for (ch, sep) in word.chars().zip(seps.iter()) {
            spaced.push(ch);
            spaced.push_str(sep);
        }
        prop_assert_eq!(normalize_key(&spaced), normalize_key(&word));
    }

    #[test]
    fn a_single_header_always_resolves_itself(stem in "[A-Za-z]{1,8}(_[A-Za-z]{1,8})?", year in 1900i32..2100) {
        let header = format!("{stem}_{year}");
        let found = find_column(&[header.clone()], &stem, Some(year)).unwrap();
        prop_assert_eq!(found.column, Some(ResolvedColumn { index: 0, name: header }));
    }
}
