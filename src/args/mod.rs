//! Argument handling pipeline.
//!
//! ```text
//! Raw args → Classify → Resolve targets → Assemble → Invocation
//! ```
//!
//! Each stage can be unit-tested on its own.

mod assembler;
mod classifier;
mod pipeline;
mod registry;
mod session;

pub use assembler::{assemble, expand_template, ArgAssembler, AssembledCommand};
pub use classifier::{classify, ClassifiedArg, ClassifyResult};
pub use pipeline::build_invocation;
pub use registry::{flag_registry, FlagArity, FlagDef};
pub use session::{project_name, Session};
