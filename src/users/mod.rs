//! Identity store: user records, roles and account status.

pub mod models;
pub mod repository;
pub mod service;

pub use models::{Role, User, UserStatus};
pub use repository::UserRepository;
pub use service::UserService;
