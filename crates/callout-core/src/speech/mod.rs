//! Speech capability contracts: recognition in, synthesis out.

mod recognizer;
mod synthesizer;

pub use recognizer::{
    AudioDevice, RecognizerKind, RecognizerRegistry, SpeechRecognizer, TranscriptCallback,
};
pub use synthesizer::{SpeechSynthesizer, SynthesizerKind, SynthesizerRegistry};
