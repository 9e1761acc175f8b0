use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, info};

use crate::domain::customer::{
    Customer, CustomerError, CustomerFields, CustomerId, CustomerRepository,
};
use crate::domain::Entity;

use super::seed;

/// 登録順を保持するメモリ上の顧客リポジトリ
#[derive(Clone, Debug)]
pub struct InMemoryCustomerRepository {
    customers: Vec<Customer>,
    next_id: i64,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::with_customers(Vec::new())
    }

    /// 採番は既存の最大ID + 1 から始める
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        let next_id = customers.iter().map(|c| *c.id()).max().unwrap_or(0) + 1;
        Self { customers, next_id }
    }

    pub fn seeded<R: Rng>(rng: &mut R) -> Self {
        Self::with_customers(seed::generate(rng))
    }

    fn position(&self, id: CustomerId) -> Result<usize, CustomerError> {
        self.customers
            .iter()
            .position(|c| c.id() == id)
            .ok_or(CustomerError::NotFound(id))
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        debug!("{}を検索: {}", Customer::ENTITY_NAME, id);
        self.position(id).map(|i| self.customers[i].clone())
    }

    async fn add(&mut self, fields: CustomerFields) -> Customer {
        let customer = Customer::create(self.next_id.into(), fields);
        self.next_id += 1;
        self.customers.push(customer.clone());
        info!("{}を追加: {}", Customer::ENTITY_NAME, customer.id());
        customer
    }

    async fn update(
        &mut self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Customer, CustomerError> {
        let i = self.position(id)?;
        let customer = &mut self.customers[i];
        customer.change(fields);
        info!("{}を更新: {}", Customer::ENTITY_NAME, id);
        Ok(customer.clone())
    }

    async fn delete(&mut self, id: CustomerId) -> Result<(), CustomerError> {
        let i = self.position(id)?;
        self.customers.remove(i);
        info!("{}を削除: {}", Customer::ENTITY_NAME, id);
        Ok(())
    }

    async fn count(&self) -> usize {
        self.customers.len()
    }
}
