//! Nearest-depot assignment of customers.

use crate::error::{Error, Result};
use crate::problem::{Customer, CustomerId, Depot};
use std::collections::HashMap;

/// A fixed partition of the customer universe over the depots.
///
/// Every customer belongs to exactly one depot; a depot may own none.
#[derive(Debug, Clone, PartialEq)]
pub struct DepotAssignment {
    /// Customer ids per depot index, in customer input order
    groups: Vec<Vec<CustomerId>>,
    /// Owning depot index per customer id
    owner: HashMap<CustomerId, usize>,
}

impl DepotAssignment {
    /// Number of depots covered by the assignment, including empty ones.
    pub fn depot_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of customers in the partitioned universe.
    pub fn customer_count(&self) -> usize {
        self.owner.len()
    }

    /// Customers owned by the given depot.
    pub fn customers_of(&self, depot_index: usize) -> &[CustomerId] {
        self.groups
            .get(depot_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Depot owning the given customer.
    pub fn depot_of(&self, customer: CustomerId) -> Option<usize> {
        self.owner.get(&customer).copied()
    }

    /// Iterate over `(depot_index, customers)` in depot-index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[CustomerId])> {
        self.groups.iter().enumerate().map(|(i, g)| (i, g.as_slice()))
    }

    /// All customer ids, grouped by depot in depot-index order.
    pub fn all_customers(&self) -> Vec<CustomerId> {
        self.groups.iter().flatten().copied().collect()
    }
}

/// Assign every customer to its nearest depot.
///
/// Ties go to the depot appearing first in `depots`.
pub fn assign(customers: &[Customer], depots: &[Depot]) -> Result<DepotAssignment> {
    if customers.is_empty() {
        return Err(Error::invalid_input("cannot assign an empty customer sequence"));
    }
    if depots.is_empty() {
        return Err(Error::invalid_input("cannot assign customers without depots"));
    }

    let mut groups = vec![Vec::new(); depots.len()];
    let mut owner = HashMap::with_capacity(customers.len());

    for customer in customers {
        let mut nearest = 0;
        let mut min_distance = f64::INFINITY;

        for (index, depot) in depots.iter().enumerate() {
            let distance = customer.location.distance(&depot.location);
            if distance < min_distance {
                min_distance = distance;
                nearest = index;
            }
        }

        if owner.insert(customer.id, nearest).is_some() {
            return Err(Error::invalid_input(format!(
                "duplicate customer id {}",
                customer.id
            )));
        }
        groups[nearest].push(customer.id);
    }

    let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
    log::debug!("assigned {} customers to depots: {:?}", owner.len(), sizes);

    Ok(DepotAssignment { groups, owner })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_are_rejected() {
        let customers = vec![Customer::new(1, 1.0, 1.0)];
        let depots = vec![Depot::new(0.0, 0.0)];

        assert!(matches!(assign(&[], &depots), Err(Error::InvalidInput(_))));
        assert!(matches!(assign(&customers, &[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_tie_goes_to_first_depot() {
        let customers = vec![Customer::new(1, 5.0, 0.0)];
        let depots = vec![Depot::new(0.0, 0.0), Depot::new(10.0, 0.0)];

        let assignment = assign(&customers, &depots).unwrap();
        assert_eq!(assignment.depot_of(1), Some(0));
        assert!(assignment.customers_of(1).is_empty());
    }

    #[test]
    fn test_depot_without_customers_is_kept() {
        let customers = vec![Customer::new(1, 1.0, 0.0), Customer::new(2, 2.0, 0.0)];
        let depots = vec![Depot::new(0.0, 0.0), Depot::new(100.0, 100.0)];

        let assignment = assign(&customers, &depots).unwrap();
        assert_eq!(assignment.depot_count(), 2);
        assert_eq!(assignment.customers_of(0), &[1, 2]);
        assert!(assignment.customers_of(1).is_empty());
        assert!(assignment.customers_of(7).is_empty());
    }
}
