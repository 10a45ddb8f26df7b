use serde::Serialize;

/// Query parameters for `GET /api/reserves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservesQuery {
    pub is_half_width: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl ReservesQuery {
    /// First request: no limit, the server applies its default page size.
    pub fn first_page() -> Self {
        Self {
            is_half_width: true,
            limit: None,
        }
    }

    /// Follow-up request sized to the total reported by the first response.
    pub fn with_limit(limit: u64) -> Self {
        Self {
            is_half_width: true,
            limit: Some(limit),
        }
    }
}
