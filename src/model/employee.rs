use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "position": "Backend Developer",
        "phone": "+8801712345678",
        "address": "Dhaka"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering", nullable = true)]
    pub department: Option<String>,

    #[schema(example = "Backend Developer", nullable = true)]
    pub position: Option<String>,

    #[schema(example = "+8801712345678", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "Dhaka", nullable = true)]
    pub address: Option<String>,
}
