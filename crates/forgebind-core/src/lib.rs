pub mod addresses;
pub mod artifact;
pub mod casing;
pub mod codegen;
pub mod envfile;
pub mod error;

pub use addresses::AddressBook;
pub use artifact::{contract_name, discover_artifacts, is_artifact_file, ContractArtifact};
pub use casing::{camel_case, upper_snake_case};
pub use codegen::{
    binding_export_name, binding_file_name, generation_timestamp, render_aggregate_module,
    render_binding_module, ProcessedContract, AGGREGATE_FILE_NAME,
};
pub use envfile::{env_key, sync_env_file, upsert_line};
pub use error::{Error, Result};
