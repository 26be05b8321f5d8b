#![cfg(test)]
use ipgate_common::assignments::Assignments;
use ipgate_common::network::overlap::{self, OverlapResult};
use ipgate_core::client::ClientIpSources;
use ipgate_core::policy;
use pretty_assertions::assert_eq;

fn teams() -> Assignments {
    [("teamA", "1.1.1.10"), ("teamB", "10.1.1.100-10.1.1.115")]
        .into_iter()
        .collect()
}

/// Request path: pick the client address, then find its team.
#[test]
fn request_resolves_team_from_remote_addr() {
    let sources = ClientIpSources {
        remote_addr: Some("10.1.1.113".to_string()),
        client_ip: None,
        forwarded_for: Some("1.1.1.10".to_string()),
    };
    let mapping = teams();

    let client_ip = sources.resolve().expect("client address present");
    let key = policy::find_matching_key(client_ip, mapping.iter()).unwrap();

    assert_eq!(key, Some("teamB"));
}

#[test]
fn forwarded_hop_list_is_invalid_not_a_miss() {
    let sources = ClientIpSources {
        remote_addr: None,
        client_ip: None,
        forwarded_for: Some("10.1.1.113, 172.16.0.1".to_string()),
    };

    let client_ip = sources.resolve().unwrap();
    assert!(policy::find_matching_key(client_ip, teams().iter()).is_err());
}

#[test]
fn inclusive_range_bounds() {
    let haystack = ["10.1.1.100-10.1.1.115"];
    assert_eq!(
        overlap::entry_overlaps_any("10.1.1.115", haystack),
        OverlapResult::Overlaps
    );
    assert_eq!(
        overlap::entry_overlaps_any("10.1.1.116", haystack),
        OverlapResult::Disjoint
    );
    assert_eq!(
        overlap::entry_overlaps_any("10.1.1.100", haystack),
        OverlapResult::Overlaps
    );
}

#[test]
fn bad_stored_field_does_not_block_other_keys() {
    let mapping: Assignments = "\
broken = 10.1.1.1-10.1.1.0
teamB = 10.1.1.100-10.1.1.115
"
    .parse()
    .unwrap();

    assert_eq!(
        policy::find_matching_key("10.1.1.101", mapping.iter()),
        Ok(Some("teamB"))
    );
    assert_eq!(policy::find_matching_key("10.1.1.0", mapping.iter()), Ok(None));
}

#[test]
fn batch_lookup_against_shared_snapshot() {
    let mapping = teams();
    let ips: Vec<String> = (95..=120).map(|last| format!("10.1.1.{last}")).collect();

    let results = policy::find_matching_keys(&ips, &mapping);

    for (ip, result) in ips.iter().zip(&results) {
        let last: u8 = ip.rsplit('.').next().unwrap().parse().unwrap();
        let expected = if (100..=115).contains(&last) { Some("teamB") } else { None };
        assert_eq!(result, &Ok(expected), "ip: {ip}");
    }
}
