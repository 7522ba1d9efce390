pub mod api_key;
pub mod optional_api_key;

pub trait Extractor {
    type Extracted;

    fn extracted(&self) -> &Self::Extracted;

    fn into_extracted(self) -> Self::Extracted;
}
