// Patch definitions loaded from files and layered with command line values

pub mod patch_config;

pub use patch_config::{load_block, PatchConfig, PatchDefinition};
