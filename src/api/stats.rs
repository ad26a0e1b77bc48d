//! Stats Endpoint

use crate::models::Stats;
use super::{api_fetch, ApiResult, Method};

const STATS_PATH: &str = "/api/stats";

pub async fn get_stats(base: &str) -> ApiResult<Stats> {
    api_fetch(base, Method::Get, STATS_PATH, None).await?.into_json()
}
