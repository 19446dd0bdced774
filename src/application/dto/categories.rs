use crate::domain::category::CategoryCount;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCountDto {
    pub name: String,
    pub count: u64,
}

impl From<CategoryCount> for CategoryCountDto {
    fn from(aggregate: CategoryCount) -> Self {
        Self {
            name: aggregate.name,
            count: aggregate.count,
        }
    }
}
