//! Problem definition and data structures for the MDVRP.

use crate::error::{Error, Result};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Identifier of a customer. Unique and positive within a problem.
pub type CustomerId = usize;

/// A customer to be visited from its depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(flatten)]
    pub location: Point,
}

impl Customer {
    /// Create a new customer.
    pub fn new(id: CustomerId, x: f64, y: f64) -> Self {
        Customer {
            id,
            location: Point::new(x, y),
        }
    }
}

/// A depot, identified by its position in the problem's depot sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    #[serde(flatten)]
    pub location: Point,
}

impl Depot {
    /// Create a new depot.
    pub fn new(x: f64, y: f64) -> Self {
        Depot {
            location: Point::new(x, y),
        }
    }
}

/// On-disk layout of an instance.
#[derive(Debug, Deserialize)]
struct ProblemData {
    #[serde(default)]
    name: String,
    customers: Vec<Customer>,
    depots: Vec<Depot>,
}

/// A validated MDVRP instance.
///
/// Customers and depots are read-only for the lifetime of a solver run.
#[derive(Debug, Clone)]
pub struct Problem {
    pub name: String,
    pub customers: Vec<Customer>,
    pub depots: Vec<Depot>,
    customers_by_id: HashMap<CustomerId, usize>,
}

impl Problem {
    /// Create a new problem, checking that both sequences are non-empty,
    /// customer ids are unique and positive, and all coordinates are finite.
    pub fn new(name: impl Into<String>, customers: Vec<Customer>, depots: Vec<Depot>) -> Result<Self> {
        if customers.is_empty() {
            return Err(Error::invalid_input("problem has no customers"));
        }
        if depots.is_empty() {
            return Err(Error::invalid_input("problem has no depots"));
        }

        let mut customers_by_id = HashMap::with_capacity(customers.len());
        for (index, customer) in customers.iter().enumerate() {
            if customer.id == 0 {
                return Err(Error::invalid_input("customer ids must be positive"));
            }
            if !customer.location.is_finite() {
                return Err(Error::invalid_input(format!(
                    "customer {} has non-finite coordinates",
                    customer.id
                )));
            }
            if customers_by_id.insert(customer.id, index).is_some() {
                return Err(Error::invalid_input(format!(
                    "duplicate customer id {}",
                    customer.id
                )));
            }
        }

        if let Some(index) = depots.iter().position(|d| !d.location.is_finite()) {
            return Err(Error::invalid_input(format!(
                "depot {} has non-finite coordinates",
                index
            )));
        }

        Ok(Problem {
            name: name.into(),
            customers,
            depots,
            customers_by_id,
        })
    }

    /// Get the number of customers.
    pub fn get_customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Get the number of depots.
    pub fn get_depot_count(&self) -> usize {
        self.depots.len()
    }

    /// Look up a customer by its identifier.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers_by_id.get(&id).map(|&index| &self.customers[index])
    }

    /// Check whether an identifier belongs to the customer universe.
    pub fn contains_customer(&self, id: CustomerId) -> bool {
        self.customers_by_id.contains_key(&id)
    }

    /// Identifiers of all customers, in input order.
    pub fn customer_ids(&self) -> Vec<CustomerId> {
        self.customers.iter().map(|c| c.id).collect()
    }

    /// Load a problem from a JSON file of the form
    /// `{"name": .., "customers": [{"id", "x", "y"}], "depots": [{"x", "y"}]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let data: ProblemData = serde_json::from_reader(BufReader::new(file))?;
        Problem::new(data.name, data.customers, data.depots)
    }

    /// Parse a problem from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: ProblemData = serde_json::from_str(json)?;
        Problem::new(data.name, data.customers, data.depots)
    }
}
