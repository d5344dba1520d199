//! Tests for the balancer

use rscales::util::testing;
use rscales::{balance, parse_reader, BalanceMasses, BalanceReport, Pan, ScaleError, ScaleTree};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn balanced(input: &str) -> (ScaleTree, BalanceReport) {
    let tree = parse_reader(input.as_bytes()).expect("valid tree");
    let report = balance(&tree).expect("balanceable tree");
    (tree, report)
}

/// Effective weight a balanced sub-scale contributes upward.
fn effective(left: u64, right: u64) -> u64 {
    2 * left.max(right) + 1
}

#[rstest]
#[case::already_balanced(5, 5, 0, 0)]
#[case::heavier_left(10, 3, 0, 7)]
#[case::heavier_right(3, 10, 7, 0)]
#[case::zero_mass(0, 4, 4, 0)]
fn given_two_literal_pans_when_balancing_then_fills_lighter_side(
    #[case] left: u64,
    #[case] right: u64,
    #[case] add_left: u64,
    #[case] add_right: u64,
) {
    let (_, report) = balanced(&format!("a {} {}\n", left, right));

    assert_eq!(
        report["a"],
        BalanceMasses {
            left: add_left,
            right: add_right
        }
    );
}

#[test]
fn given_nested_tree_when_balancing_then_matches_worked_example() {
    // Arrange: b contributes 2*max(5,5)+1 = 11, c contributes 2*max(2,8)+1 = 17
    let input = "a b c\nb 5 5\nc 2 8\n";

    // Act
    let (_, report) = balanced(input);

    // Assert
    assert_eq!(report["a"], BalanceMasses { left: 6, right: 0 });
    assert_eq!(report["b"], BalanceMasses { left: 0, right: 0 });
    assert_eq!(report["c"], BalanceMasses { left: 0, right: 6 });

    let lines: Vec<String> = report
        .iter()
        .map(|(name, m)| format!("{},{},{}", name, m.left, m.right))
        .collect();
    assert_eq!(lines, vec!["a,6,0", "b,0,0", "c,0,6"]);
}

#[test]
fn given_deep_chain_when_balancing_then_effective_weights_compound() {
    // d balances to effective 2*max(1,3)+1 = 7; c compares 7 vs 2,
    // balances to effective 2*7+1 = 15; b compares 15 vs 15.
    let input = "b c 15\nc d 2\nd 1 3\n";

    let (_, report) = balanced(input);

    assert_eq!(report["d"], BalanceMasses { left: 2, right: 0 });
    assert_eq!(report["c"], BalanceMasses { left: 0, right: 5 });
    assert_eq!(report["b"], BalanceMasses { left: 0, right: 0 });

    assert_eq!(effective(1, 3), 7);
    assert_eq!(effective(7, 7), 15);
}

#[test]
fn given_mass_at_u64_max_when_balancing_then_errors_instead_of_wrapping() {
    // a's effective weight would be 2*u64::MAX + 1.
    let input = "root a 1\na 18446744073709551615 1\n";
    let tree = parse_reader(input.as_bytes()).unwrap();

    let err = balance(&tree).unwrap_err();

    assert!(matches!(err, ScaleError::WeightOverflow(ref name) if name.as_str() == "a"));
}

#[test]
fn given_largest_propagatable_mass_when_balancing_then_succeeds() {
    // 2 * ((u64::MAX - 1) / 2) + 1 == u64::MAX, the last value that fits.
    let input = "root a 1\na 9223372036854775807 0\n";

    let (_, report) = balanced(input);

    assert_eq!(report["a"].right, 9223372036854775807);
    assert_eq!(report["root"], BalanceMasses { left: 0, right: u64::MAX - 1 });
}

#[test]
fn given_any_valid_tree_when_balancing_then_report_covers_every_scale() {
    let (tree, report) = balanced("root l r\nl a b\nr 9 9\na 1 1\nb 2 3\n");

    assert_eq!(report.len(), tree.len());
    for name in ["root", "l", "r", "a", "b"] {
        assert!(report.contains_key(name), "missing entry for {}", name);
    }
}

#[test]
fn given_any_valid_tree_when_balancing_then_at_most_one_side_gets_mass() {
    let (tree, report) = balanced("root l r\nl a b\nr 9 9\na 1 1\nb 2 3\n");

    for (name, masses) in &report {
        assert!(
            masses.left == 0 || masses.right == 0,
            "both sides of {} got mass: {:?}",
            name,
            masses
        );

        // The resolved side weights plus added masses must be equal.
        let scale = tree.get(name).unwrap();
        let left = resolve(&tree, &report, &scale.left);
        let right = resolve(&tree, &report, &scale.right);
        assert_eq!(left + masses.left, right + masses.right, "scale {}", name);
    }
}

/// Resolved weight of a pan after every sub-scale has been balanced:
/// literal masses as-is, references via the effective-weight convention.
fn resolve(tree: &ScaleTree, report: &BalanceReport, pan: &Pan) -> u64 {
    match pan {
        Pan::Mass(mass) => *mass,
        Pan::Scale(name) => {
            let scale = tree.get(name).unwrap();
            let left = resolve(tree, report, &scale.left) + report[name].left;
            let right = resolve(tree, report, &scale.right) + report[name].right;
            assert_eq!(left, right);
            2 * left.max(right) + 1
        }
    }
}
