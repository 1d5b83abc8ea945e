use super::*;
use crate::error::BalanceError;

// ========================================================================
// parse_cells
// ========================================================================

#[test]
fn test_parse_comma_separated() {
    let parsed = parse_cells("2501, 2480, 2550");
    assert_eq!(parsed.cells, vec![2501.0, 2480.0, 2550.0]);
    assert!(parsed.rejected.is_empty());
}

#[test]
fn test_parse_mixed_separators() {
    let parsed = parse_cells("2501 2480\n2550,,2390\t2410 ,  2455");
    assert_eq!(parsed.len(), 6);
    assert_eq!(parsed.cells[3], 2390.0);
}

#[test]
fn test_parse_keeps_duplicates_and_order() {
    let parsed = parse_cells("10, 10, 9.5, 10");
    assert_eq!(parsed.cells, vec![10.0, 10.0, 9.5, 10.0]);
}

#[test]
fn test_parse_rejects_bad_tokens() {
    let parsed = parse_cells("2500, abc, -100, 0, 2400, NaN, inf");
    assert_eq!(parsed.cells, vec![2500.0, 2400.0]);
    assert_eq!(parsed.rejected, vec!["abc", "-100", "0", "NaN", "inf"]);
}

#[test]
fn test_parse_empty_text() {
    assert!(parse_cells("").is_empty());
    assert!(parse_cells("   \n , ,").is_empty());
    assert!(parse_cells(" , ").rejected.is_empty());
}

// ========================================================================
// PackTopology
// ========================================================================

#[test]
fn test_topology_required_cells() {
    let topology = PackTopology::new(13, 4).unwrap();
    assert_eq!(topology.required_cells(), 52);
    assert_eq!(topology.to_string(), "13S4P");
}

#[test]
fn test_topology_rejects_zero() {
    assert!(matches!(
        PackTopology::new(0, 4),
        Err(BalanceError::DegenerateConfig(_))
    ));
    assert!(matches!(
        PackTopology::new(4, 0),
        Err(BalanceError::DegenerateConfig(_))
    ));
}

#[test]
fn test_topology_parse_notation() {
    assert_eq!(
        PackTopology::parse("4S5P").unwrap(),
        PackTopology::new(4, 5).unwrap()
    );
    assert_eq!(
        " 13s4p ".parse::<PackTopology>().unwrap(),
        PackTopology::new(13, 4).unwrap()
    );
}

#[test]
fn test_topology_parse_invalid() {
    for raw in ["", "4S", "S5P", "4x5", "4S5", "aSbP", "4S-1P"] {
        let result = PackTopology::parse(raw);
        assert!(
            matches!(result, Err(BalanceError::InvalidTopology(_))),
            "Expected invalid topology for {:?}",
            raw
        );
    }
    assert!(matches!(
        PackTopology::parse("0S5P"),
        Err(BalanceError::DegenerateConfig(_))
    ));
}

#[test]
fn test_topology_check_count() {
    let topology = PackTopology::new(2, 2).unwrap();
    assert!(topology.check(&[1.0, 2.0, 3.0, 4.0]).is_ok());
    assert_eq!(
        topology.check(&[1.0, 2.0, 3.0]),
        Err(BalanceError::CountMismatch {
            provided: 3,
            required: 4
        })
    );
}

#[test]
fn test_demo_data_matches_topology() {
    assert_eq!(DEMO_TOPOLOGY.to_string(), "4S5P");
    assert!(DEMO_TOPOLOGY.check(&DEMO_CELLS).is_ok());
}
