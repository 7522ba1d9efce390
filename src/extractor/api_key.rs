use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{
    error::{ApiError, ApiKeyError},
    extractor::Extractor,
    header::get_api_key,
    traits::ErrorVerbosityProvider,
    types::used_api_key::UsedApiKey,
};

/// Extracts the API key from the `Authorization: ApiKey <token>` request header.
///
/// The API key is not validated.
#[derive(Debug, Clone)]
pub struct ApiKey(pub UsedApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let used_api_key = get_api_key(&parts.headers).map_err(|err| {
            tracing::warn!(%err, "Rejection");

            ApiKeyError::new(verbosity, err.into())
        })?;

        let used_api_key = UsedApiKey::from(used_api_key);

        tracing::trace!(?used_api_key, "Extracted");

        Ok(ApiKey(used_api_key))
    }
}

impl Extractor for ApiKey {
    type Extracted = UsedApiKey;

    fn extracted(&self) -> &Self::Extracted {
        &self.0
    }

    fn into_extracted(self) -> Self::Extracted {
        self.0
    }
}
