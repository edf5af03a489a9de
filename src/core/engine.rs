use crate::config::EngineConfig;
use crate::core::registry::{CurrencyMetadata, CurrencyRegistry};
use crate::core::schema::SERIAL_KEY;
use crate::core::types::{Label, RecognitionRequest, RecognitionResult};
use crate::core::{classifier, extractor, gate, tokens};
use crate::error::{MintError, Result};
use std::sync::Arc;
use tracing::{debug, info};

// The engine owns no per-request state; every call works on one registry snapshot.
pub struct MintEngine {
    registry: Arc<CurrencyRegistry>,
    config: EngineConfig,
}

impl MintEngine {
    pub fn new(registry: Arc<CurrencyRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    pub fn with_builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(CurrencyRegistry::builtin()?), EngineConfig::default()))
    }

    pub fn registry(&self) -> &Arc<CurrencyRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Same as [`MintEngine::process_money`], starting from raw OCR text annotations.
    pub fn process_texts<S: AsRef<str>>(
        &self,
        currency_code: &str,
        denomination: &str,
        texts: &[S],
        labels: &[Label],
    ) -> Result<RecognitionResult> {
        self.process_money(&RecognitionRequest {
            currency_code: currency_code.to_string(),
            denomination: denomination.to_string(),
            tokens: tokens::tokenize(texts),
            labels: labels.to_vec(),
        })
    }

    pub fn process_money(&self, request: &RecognitionRequest) -> Result<RecognitionResult> {
        // 1. Admit the request against one consistent metadata snapshot
        let metadata = self.admit(request)?;

        // 2. Money gate: labels first, then currency landmarks
        if !gate::is_money(&request.labels, &self.config) {
            return Err(MintError::NotMoney);
        }
        if !gate::has_text_marks(&metadata, &request.tokens) {
            return Err(MintError::TextMarkMismatch(metadata.code.clone()));
        }

        // 3. Detect the denomination unless the caller supplied one
        let denomination = if request.denomination.is_empty() {
            let detected = classifier::classify(&metadata, &request.tokens);
            debug!(currency = %metadata.code, denomination = %detected, "detected denomination");
            detected
        } else {
            request.denomination.clone()
        };

        // 4. Extract the serial with the directive for that denomination
        let tree = metadata
            .serial
            .as_ref()
            .ok_or_else(|| MintError::DirectiveNotDefined(SERIAL_KEY.to_string()))?;
        let serial = extractor::extract_serial(tree, Some(denomination.as_str()), &request.tokens)?;

        info!(
            currency = %metadata.code,
            denomination = %denomination,
            serial_found = !serial.is_empty(),
            "processed money"
        );
        Ok(RecognitionResult { denomination, serial })
    }

    fn admit(&self, request: &RecognitionRequest) -> Result<Arc<CurrencyMetadata>> {
        let code = request.currency_code.trim().to_uppercase();
        let metadata = self.registry.lookup(&code)?;
        if !metadata.is_defined() {
            return Err(MintError::CurrencyNotConfigured(code));
        }
        if !request.denomination.is_empty() && metadata.denomination(&request.denomination).is_none() {
            return Err(MintError::InvalidDenomination {
                code,
                denomination: request.denomination.clone(),
            });
        }
        Ok(metadata)
    }
}
