use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{
    error::{ApiError, ApiKeyError, ExtractionError},
    extractor::Extractor,
    header::get_api_key,
    traits::ErrorVerbosityProvider,
    types::used_api_key::UsedApiKey,
};

/// Extracts an optional API key from the request headers.
///
/// Resolves to `None` if no `Authorization` header was sent.
/// A present but malformed header is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalApiKey(pub Option<UsedApiKey>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalApiKey
where
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "optional_api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(used_api_key) => {
                let used_api_key = UsedApiKey::from(used_api_key);

                tracing::trace!(?used_api_key, "Extracted");

                Ok(OptionalApiKey(Some(used_api_key)))
            }
            Err(ExtractionError::NoAuthHeader) => {
                tracing::trace!("No API key");

                Ok(OptionalApiKey(None))
            }
            Err(err) => {
                tracing::warn!(%err, "Rejection");

                Err(ApiKeyError::new(state.error_verbosity(), err.into()).into())
            }
        }
    }
}

impl Extractor for OptionalApiKey {
    type Extracted = Option<UsedApiKey>;

    fn extracted(&self) -> &Self::Extracted {
        &self.0
    }

    fn into_extracted(self) -> Self::Extracted {
        self.0
    }
}
