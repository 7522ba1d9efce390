use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::utils::mask_fmt;

/// A struct to hold the used API key.
///
/// The key is masked in [`Debug`] output so it never reaches the logs.
#[derive(Clone, PartialEq, Eq, Derivative, Deserialize, Serialize)]
#[derivative(Debug)]
#[serde(transparent)]
pub struct UsedApiKey {
    #[derivative(Debug(format_with = "mask_fmt"))]
    pub used_api_key: String,
}

impl From<&str> for UsedApiKey {
    fn from(used_api_key: &str) -> Self {
        Self {
            used_api_key: used_api_key.to_string(),
        }
    }
}
