use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned by every failed request.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
