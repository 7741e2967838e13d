pub mod rest;
pub mod types;

pub use rest::Instances;
pub use types::{InstanceMember, InstanceMemberRole, UpdateInstanceInput, UpdateInstanceMemberRoleInput};
