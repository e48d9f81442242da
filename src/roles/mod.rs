//! Roles and the allocator that deals them.
//!
//! Every table has exactly one Liar. Tables at or above the configured
//! threshold (4 by default) also get one Troll. Everyone else is a Citizen.

mod role;
mod allocator;

pub use role::Role;
pub use allocator::{RoleAllocator, RoleAssignment, RoleCounts};
