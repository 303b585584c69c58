//! Tests for problem construction and JSON loading.

use mdvrp_ga::error::Error;
use mdvrp_ga::problem::{Customer, Depot, Problem};
use std::io::Write;

#[test]
fn test_problem_lookup_by_id() {
    let problem = Problem::new(
        "Lookup",
        vec![Customer::new(7, 1.0, 2.0), Customer::new(3, 4.0, 5.0)],
        vec![Depot::new(0.0, 0.0)],
    )
    .unwrap();

    assert_eq!(problem.get_customer_count(), 2);
    assert_eq!(problem.get_depot_count(), 1);
    assert_eq!(problem.customer(3).unwrap().location.x, 4.0);
    assert!(problem.customer(5).is_none());
    assert!(problem.contains_customer(7));
    assert_eq!(problem.customer_ids(), vec![7, 3]);
}

#[test]
fn test_problem_validation() {
    let depot = vec![Depot::new(0.0, 0.0)];

    let empty_customers = Problem::new("A", vec![], depot.clone());
    assert!(matches!(empty_customers, Err(Error::InvalidInput(_))));

    let empty_depots = Problem::new("B", vec![Customer::new(1, 0.0, 0.0)], vec![]);
    assert!(matches!(empty_depots, Err(Error::InvalidInput(_))));

    let zero_id = Problem::new("C", vec![Customer::new(0, 0.0, 0.0)], depot.clone());
    assert!(matches!(zero_id, Err(Error::InvalidInput(_))));

    let duplicate = Problem::new(
        "D",
        vec![Customer::new(1, 0.0, 0.0), Customer::new(1, 1.0, 1.0)],
        depot.clone(),
    );
    assert!(matches!(duplicate, Err(Error::InvalidInput(_))));

    let not_finite = Problem::new("E", vec![Customer::new(1, f64::NAN, 0.0)], depot);
    assert!(matches!(not_finite, Err(Error::InvalidInput(_))));
}

#[test]
fn test_problem_from_json() {
    let json = r#"{
        "name": "Tiny",
        "customers": [
            {"id": 1, "x": 1.0, "y": 1.0},
            {"id": 2, "x": 9.0, "y": 9.0}
        ],
        "depots": [{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 10.0}]
    }"#;

    let problem = Problem::from_json_str(json).unwrap();
    assert_eq!(problem.name, "Tiny");
    assert_eq!(problem.get_customer_count(), 2);
    assert_eq!(problem.depots[1].location.y, 10.0);
}

#[test]
fn test_problem_from_json_file() {
    let path = std::env::temp_dir().join(format!("mdvrp_ga_problem_{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"customers": [{{"id": 4, "x": 2.0, "y": 3.0}}], "depots": [{{"x": 0.0, "y": 0.0}}]}}"#
        )
        .unwrap();
    }

    let problem = Problem::from_json_file(&path).unwrap();
    assert_eq!(problem.name, "");
    assert!(problem.contains_customer(4));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_problem_from_bad_json() {
    assert!(matches!(
        Problem::from_json_str("{\"customers\": 3}"),
        Err(Error::Parse(_))
    ));
    assert!(matches!(
        Problem::from_json_file("/nonexistent/instance.json"),
        Err(Error::Io(_))
    ));
}
