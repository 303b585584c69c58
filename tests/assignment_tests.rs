//! Tests for the nearest-depot assignment.

use mdvrp_ga::assignment::assign;
use mdvrp_ga::problem::{Customer, Depot};
use std::collections::HashSet;

/// Creates the two-cluster scenario: depots at opposite corners, two customers near each.
fn create_two_cluster_instance() -> (Vec<Customer>, Vec<Depot>) {
    let customers = vec![
        Customer::new(1, 1.0, 1.0),
        Customer::new(2, 1.0, 2.0),
        Customer::new(3, 9.0, 9.0),
        Customer::new(4, 9.0, 8.0),
    ];
    let depots = vec![Depot::new(0.0, 0.0), Depot::new(10.0, 10.0)];
    (customers, depots)
}

#[test]
fn test_two_clusters_go_to_obvious_depots() {
    let (customers, depots) = create_two_cluster_instance();
    let assignment = assign(&customers, &depots).unwrap();

    assert_eq!(assignment.customers_of(0), &[1, 2]);
    assert_eq!(assignment.customers_of(1), &[3, 4]);
    assert_eq!(assignment.depot_of(3), Some(1));
}

#[test]
fn test_assignment_is_partition() {
    // 30 customers spread over a grid, 4 depots
    let customers: Vec<Customer> = (0..30)
        .map(|i| Customer::new(i + 1, (i % 6) as f64 * 7.3, (i / 6) as f64 * 11.1))
        .collect();
    let depots = vec![
        Depot::new(0.0, 0.0),
        Depot::new(40.0, 0.0),
        Depot::new(0.0, 45.0),
        Depot::new(20.0, 20.0),
    ];

    let assignment = assign(&customers, &depots).unwrap();

    let mut seen = HashSet::new();
    for (_, group) in assignment.iter() {
        for &id in group {
            // Pairwise disjoint
            assert!(seen.insert(id), "customer {} owned twice", id);
        }
    }

    let universe: HashSet<usize> = customers.iter().map(|c| c.id).collect();
    assert_eq!(seen, universe);
    assert_eq!(assignment.customer_count(), 30);
    assert_eq!(assignment.depot_count(), 4);
}

#[test]
fn test_each_customer_goes_to_a_nearest_depot() {
    let customers: Vec<Customer> = (0..12)
        .map(|i| Customer::new(i + 1, i as f64 * 3.0, 25.0 - i as f64 * 2.0))
        .collect();
    let depots = vec![Depot::new(5.0, 5.0), Depot::new(30.0, 5.0), Depot::new(15.0, 30.0)];

    let assignment = assign(&customers, &depots).unwrap();

    for customer in &customers {
        let owner = assignment.depot_of(customer.id).unwrap();
        let owned = customer.location.distance(&depots[owner].location);
        for depot in &depots {
            assert!(owned <= customer.location.distance(&depot.location));
        }
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let customers = vec![Customer::new(1, 1.0, 1.0), Customer::new(1, 2.0, 2.0)];
    let depots = vec![Depot::new(0.0, 0.0)];

    assert!(assign(&customers, &depots).is_err());
}
