//! `/database/*`: country, category and language dictionaries.

use crate::client::TgStatClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::Params;
use crate::transport::Transport;
use crate::types::{ApiResult, Category, Country, Language};
use crate::validate::Validator;

/// Languages the dictionaries can be localized to.
pub const LANGS: &[&str] = &["ru", "en"];

fn lang_params(lang: Option<&str>) -> Result<Params, ApiError> {
    Validator::new().one_of("lang", lang, LANGS).finish()?;
    Ok(Params::new().set_opt("lang", lang.filter(|l| !l.is_empty())))
}

impl<T: Transport> TgStatClient<T> {
    pub fn build_database_countries(&self, lang: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Get, endpoints::DATABASE_COUNTRIES, &lang_params(lang)?)
    }

    pub fn database_countries(&self, lang: Option<&str>) -> Result<ApiResult<Vec<Country>>, ApiError> {
        self.send(&self.build_database_countries(lang)?)
    }

    pub fn build_database_categories(&self, lang: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Get, endpoints::DATABASE_CATEGORIES, &lang_params(lang)?)
    }

    pub fn database_categories(&self, lang: Option<&str>) -> Result<ApiResult<Vec<Category>>, ApiError> {
        self.send(&self.build_database_categories(lang)?)
    }

    pub fn build_database_languages(&self, lang: Option<&str>) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Get, endpoints::DATABASE_LANGUAGES, &lang_params(lang)?)
    }

    pub fn database_languages(&self, lang: Option<&str>) -> Result<ApiResult<Vec<Language>>, ApiError> {
        self.send(&self.build_database_languages(lang)?)
    }
}
