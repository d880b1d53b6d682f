use std::sync::Mutex;

use super::frontend::{FrontEnd, ModelInput};
use super::phonemizer::Phonemizer;
use crate::engine::config::InferenceOptions;
use crate::engine::error::{FrontendError, Result};
use crate::text::Normalizer;

/// Acoustic model session (e.g. a VITS ONNX graph): token ids in, waveform out.
///
/// Bindings are not assumed to be reentrant, hence `&mut self`.
pub trait AcousticModel: Send {
    fn infer(&mut self, input: &ModelInput, options: &InferenceOptions) -> Result<Vec<f32>>;
}

/// Front-end plus one shared model session.
///
/// Concurrent callers run the front-end in parallel; inference calls are
/// serialized on the session lock.
pub struct Synthesizer<N, P, M> {
    frontend: FrontEnd<N, P>,
    model: Mutex<M>,
}

impl<N: Normalizer, P: Phonemizer, M: AcousticModel> Synthesizer<N, P, M> {
    pub fn new(frontend: FrontEnd<N, P>, model: M) -> Self {
        log::debug!(
            "synthesizer ready ({} intra-op thread(s), remote models {})",
            frontend.config().inference.intra_op_threads,
            if frontend.config().inference.allow_remote_models {
                "allowed"
            } else {
                "disabled"
            }
        );
        Self {
            frontend,
            model: Mutex::new(model),
        }
    }

    pub fn frontend(&self) -> &FrontEnd<N, P> {
        &self.frontend
    }

    pub fn synthesize(&self, text: &str) -> Result<Vec<f32>> {
        let input = self.frontend.encode(text)?;
        let options = &self.frontend.config().inference;
        let mut model = self
            .model
            .lock()
            .map_err(|_| FrontendError::Inference("model session lock poisoned".to_string()))?;
        model.infer(&input, options)
    }

    pub fn into_model(self) -> Result<M> {
        self.model
            .into_inner()
            .map_err(|_| FrontendError::Inference("model session lock poisoned".to_string()))
    }
}
