use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use clientele_core::CustomerId;
use clientele_customers::{Customer, CustomerDetails};

use super::query::Pagination;
use super::r#trait::{CustomerStore, StoreError};

#[derive(Debug)]
struct State {
    next_id: CustomerId,
    rows: BTreeMap<CustomerId, Customer>,
}

/// In-memory customer store.
///
/// Intended for tests/dev. Rows are kept ordered by `id`, which is assigned
/// from a counter, so listing order equals creation order.
#[derive(Debug)]
pub struct InMemoryCustomerStore {
    state: RwLock<State>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                next_id: CustomerId::new(1),
                rows: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.state.read().map_err(|_| poisoned())?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::storage("lock poisoned")
}

fn ids_exhausted() -> StoreError {
    StoreError::storage("customer id space exhausted")
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, details: CustomerDetails) -> Result<Customer, StoreError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;

        let id = state.next_id;
        state.next_id = id.next().ok_or_else(ids_exhausted)?;

        let customer = Customer::new(id, details, Utc::now());
        state.rows.insert(id, customer.clone());
        Ok(customer)
    }

    async fn find_by_email(&self, email: &str) -> Result<Customer, StoreError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        state
            .rows
            .values()
            .find(|c| c.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, customer: &Customer) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        state.rows.remove(&customer.id);
        Ok(())
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, StoreError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;

        let mut saved = customer.clone();
        saved.touch(Utc::now());
        if saved.id >= state.next_id {
            state.next_id = saved.id.next().ok_or_else(ids_exhausted)?;
        }
        state.rows.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn list_page(&self, pagination: Pagination) -> Result<Vec<Customer>, StoreError> {
        let state = self.state.read().map_err(|_| poisoned())?;

        let skip = usize::try_from(pagination.offset).unwrap_or(usize::MAX);
        let take = pagination
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(state.rows.values().skip(skip).take(take).cloned().collect())
    }
}
