use serde::{Deserialize, Serialize};

use super::CustomerId;

/// 顧客（顧客管理コンテキストから渡されるスナップショット）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            customer_id: CustomerId::new(),
            name: name.into(),
        }
    }
}
