pub mod compiler;
pub mod types;

pub use compiler::PromptCompiler;
pub use types::{AdvancedOptions, CompiledPrompt, CoupletLines, GenerationConfig};
