// Public API exports
pub mod assemble;
pub mod entities;
pub mod resolver;
pub mod store;
pub mod toolchain;
pub mod transpiler;

// Re-export main types for convenience
pub use store::{ModuleStore, PathSanitizer, SourceModule, StoreBuilder, StoreError, Syntax};

pub use resolver::{DependencyResolver, ResolveError};

pub use assemble::assemble_unit;

pub use toolchain::{HttpToolchain, RawCompileResult, Toolchain, ToolchainError};

pub use transpiler::{CompileDiagnostic, CompileError, TranspileOutput, Transpiler};

pub use entities::{
    ActionError, ActionEvent, ActionKeys, ApiClient, ChannelDispatch, Dispatch, EntityActions,
    EntitySchema, NormalizedResult, RequestError, RestClient, StateReader,
};
