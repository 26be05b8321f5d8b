#![cfg(test)]
use ipgate_common::assignments::Assignments;
use ipgate_common::network::entry::{self, Entry};
use ipgate_core::policy;
use ipgate_core::prune;
use ipgate_core::PolicyError;
use pretty_assertions::assert_eq;

const MAPPING: &str = "\
# team id = addresses
12 = 1.2.3.4,10.10.10.23
34 = 10.10.10.100-10.10.10.120
56 = 1.1.1.1,2.2.2.100-2.2.2.120,3.3.3.3
78 =
";

/// A settings save goes through parsing, per-key validation and pruning the
/// same way the admin screen does.
#[test]
fn save_flow_accepts_disjoint_mapping() {
    let mut posted: Assignments = MAPPING.parse().expect("mapping parses");
    assert_eq!(posted.len(), 4);

    policy::validate_assignments(&posted).expect("disjoint mapping is valid");

    let outcome = prune::prune_assignments(&mut posted, ["12", "34", "78"]);
    assert_eq!(outcome.removed, vec!["56".to_string()]);
    assert_eq!(posted.keys().collect::<Vec<_>>(), vec!["12", "34", "78"]);
}

#[test]
fn save_flow_rejects_overlap_with_message() {
    let mut posted: Assignments = MAPPING.parse().unwrap();
    posted.insert("90", "10.10.10.120-10.10.10.130");

    let err = policy::validate_assignments(&posted).unwrap_err();

    let PolicyError::Rejected {
        key,
        other_key,
        source,
    } = err
    else {
        panic!("expected a rejected assignment");
    };
    assert_eq!(key, "34");
    assert_eq!(other_key.as_deref(), Some("90"));
    assert_eq!(
        source.to_string(),
        "The following IP values/ranges overlap: '10.10.10.100-10.10.10.120' and '10.10.10.120-10.10.10.130'."
    );
}

#[test]
fn save_flow_rejects_syntax_before_overlap() {
    let posted: Assignments = [("12", "1.1.1.1"), ("34", "1.1.1.1,2.1.1.354")]
        .into_iter()
        .collect();

    let err = policy::validate_update("34", "1.1.1.1,2.1.1.354", &posted).unwrap_err();
    let PolicyError::Rejected { source, other_key, .. } = err else {
        panic!("expected a rejected assignment");
    };
    assert!(matches!(*source, PolicyError::InvalidField { .. }));
    assert_eq!(other_key, None);
}

#[test]
fn range_order_is_reported_distinctly() {
    let err = policy::validate_candidate_field("10.0.0.9-10.0.0.1").unwrap_err();
    assert!(err.is_range_order());

    let err = policy::validate_candidate_field("10.0.0.9--10.0.0.1").unwrap_err();
    assert!(!err.is_range_order());
}

#[test]
fn candidate_against_siblings() {
    let err = policy::check_no_overlap("1.1.1.1-1.1.1.10", ["1.1.1.5"]).unwrap_err();
    assert_eq!(
        err,
        PolicyError::Overlap {
            entry: "1.1.1.1-1.1.1.10".to_string(),
            sibling: "1.1.1.5".to_string(),
            index: 0,
        }
    );

    assert!(policy::check_no_overlap("1.1.1.11-1.1.1.20", ["1.1.1.5", "1.1.1.10"]).is_ok());
}

#[test]
fn malformed_sibling_never_passes_as_clear() {
    let err = policy::check_no_overlap("1.1.1.1", ["1.1.1.1-"]).unwrap_err();
    assert!(err.is_undetermined());
}

#[test]
fn parsed_field_round_trips_to_text() {
    let text = "1.1.1.1,2.2.2.100-2.2.2.120,3.3.3.3";
    let field = entry::parse_field(text).unwrap();

    assert_eq!(field.to_string(), text);
    assert_eq!(
        field.iter().filter(|e| matches!(e, Entry::Range(_))).count(),
        1
    );
}
