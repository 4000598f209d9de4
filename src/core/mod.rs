//! Core generation logic, independent of the terminal UI.

pub mod generation;
pub mod params;
pub mod service;

pub use generation::{
    ERROR_PREFIX, GenerationController, GenerationEvent, GenerationPhase, GenerationRequest,
    GenerationResult, GenerationState, LOADING_TEXT, PLACEHOLDER_TEXT,
};
pub use params::{ParamId, ParamSpec, Parameter, ParameterStore};
pub use service::{GenerationError, GenerationService, HttpGenerationService, parse_output};
