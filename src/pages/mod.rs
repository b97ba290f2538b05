//! Page components for Engine Spec.

mod engine;

pub use engine::EngineView;
