//! Unit tests for reporting utilities.

use mdvrp_ga::chromosome::Chromosome;
use mdvrp_ga::problem::{Customer, Depot, Problem};
use mdvrp_ga::solution::{DepotRoute, RunResult};
use mdvrp_ga::utils::{format_duration, save_result_json, write_solution, SearchStatistics};
use std::time::Duration;

fn create_test_problem() -> Problem {
    Problem::new(
        "ReportProblem",
        vec![
            Customer::new(1, 1.0, 0.0),
            Customer::new(2, 2.0, 0.0),
            Customer::new(3, 3.0, 0.0),
        ],
        vec![Depot::new(0.0, 0.0), Depot::new(50.0, 50.0)],
    )
    .unwrap()
}

fn create_test_result() -> (RunResult, Vec<DepotRoute>) {
    let result = RunResult {
        best_solution: Some(Chromosome::new(vec![1, 2, 3])),
        best_fitness: 6.0,
        history: vec![8.0, 6.0],
        generations_run: 2,
    };
    let routes = vec![
        DepotRoute {
            depot_index: 0,
            customers: vec![1, 2, 3],
            distance: 6.0,
        },
        DepotRoute {
            depot_index: 1,
            customers: vec![],
            distance: 0.0,
        },
    ];
    (result, routes)
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_secs(0)), "0h 00m 00s");
    assert_eq!(format_duration(Duration::from_secs(3725)), "1h 02m 05s");
}

#[test]
fn test_write_solution_lists_routes() {
    let problem = create_test_problem();
    let (result, routes) = create_test_result();

    let mut buffer = Vec::new();
    write_solution(&mut buffer, &result, &routes, &problem).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("ReportProblem"));
    assert!(text.contains("Total Distance: 6.00"));
    assert!(text.contains("Depot #0: D0 -> 1 -> 2 -> 3 -> D0"));
    assert!(text.contains("Depot #1: Empty"));
}

#[test]
fn test_search_statistics() {
    let (result, routes) = create_test_result();
    let stats = SearchStatistics::from_run(&result, &routes, Duration::from_secs(61));

    assert_eq!(stats.generations, 2);
    assert_eq!(stats.non_empty_routes, 1);
    assert!((stats.improvement() - 0.25).abs() < 1e-12);
    assert!(stats.format().contains("Runtime: 0h 01m 01s"));
}

#[test]
fn test_save_result_json() {
    let (result, _) = create_test_result();
    let path = std::env::temp_dir().join(format!("mdvrp_ga_result_{}.json", std::process::id()));

    save_result_json(&result, &path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value["best_fitness"], 6.0);
    assert_eq!(value["history"][0], 8.0);
    assert_eq!(value["best_solution"][2], 3);

    std::fs::remove_file(&path).unwrap();
}
