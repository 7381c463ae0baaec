//! `/usage/stat`: quota consumption of the current token.

use crate::client::TgStatClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::Params;
use crate::transport::Transport;
use crate::types::{ApiResult, UsageStat};

impl<T: Transport> TgStatClient<T> {
    pub fn build_usage_stat(&self) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Get, endpoints::USAGE_STAT, &Params::new())
    }

    /// One entry per active subscription plan of the token.
    pub fn usage_stat(&self) -> Result<ApiResult<Vec<UsageStat>>, ApiError> {
        self.send(&self.build_usage_stat()?)
    }
}
