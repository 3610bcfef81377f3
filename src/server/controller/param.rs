use serde::Deserialize;

/// Query parameters of paginated list endpoints.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Query parameters selecting a customer/shipper conversation.
#[derive(Deserialize)]
pub struct ConversationParams {
    pub user_id: i32,
    pub shipper_id: i32,
}
