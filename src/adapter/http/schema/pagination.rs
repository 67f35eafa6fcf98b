use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Page selection for `GET /profiles/`; absent values fall back to page 1 of 10.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    #[param(minimum = 1, default = 1)]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,
    #[param(minimum = 1, maximum = 100, default = 10)]
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<i64>,
}
