//! User entity, role, and department types.

pub mod department;
pub mod model;
pub mod role;

pub use department::Department;
pub use model::{CreateUser, UpdateUser, User};
pub use role::UserRole;
