mod error;
mod google;
mod translator;
mod vision;

pub use error::CloudError;
pub use google::GoogleTranslator;
pub use translator::{LanguageCode, ProviderMetadata, Translation, Translator};
pub use vision::{TextRecognizer, VisionRecognizer};
