//! Build pipeline stages.
//!
//! Reset the output directory, resolve sources, select a profile, invoke the
//! toolchain, stage the artifact. Each stage takes the output directory
//! explicitly.

pub mod html;
pub mod invoke;
pub mod profile;
pub mod sources;
pub mod stage;
pub mod toolchain;
pub mod workspace;

pub use html::HostPage;
pub use invoke::{invoke, BuildResult};
pub use profile::{select_profile, BuildProfile, Linkage};
pub use sources::{resolve_sources, SourceSet};
pub use stage::{StageOutcome, StagingPlan};
pub use toolchain::{CommandRunner, CommandSpec, SystemRunner};
pub use workspace::reset_output_dir;
