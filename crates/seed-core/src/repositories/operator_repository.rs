//! Operator repository trait (port)

use async_trait::async_trait;
use crate::domain::Operator;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OperatorRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Operator>, DomainError>;
    async fn create(&self, operator: &Operator) -> Result<Operator, DomainError>;
}
