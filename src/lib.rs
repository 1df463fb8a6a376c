//! CardVault - bank card and transfer backend
//!
//! A REST service over PostgreSQL: users register and sign in with JWT,
//! own bank cards, and move money between their own cards. Admins
//! manage users and the full card population.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration with env overrides
//! - [`logging`] - tracing subscriber setup (rolling files, JSON option)
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`error`] - `CoreError`, the domain error taxonomy
//! - [`pagination`] - `PageQuery` / `Page<T>` for list endpoints
//! - [`authz`] - `Principal` and the access predicates
//! - [`card_number`] - card number generation, masking, at-rest encoding
//! - [`users`] - user accounts (models, repository, service)
//! - [`cards`] - card lifecycle (models, repository, service)
//! - [`transfers`] - transfer engine and ledger queries
//! - [`user_auth`] - password hashing, JWT issue/verify, auth middleware
//! - [`gateway`] - axum HTTP surface, OpenAPI docs

pub mod authz;
pub mod card_number;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod pagination;

// Domain modules
pub mod cards;
pub mod transfers;
pub mod users;

// HTTP surface
pub mod gateway;
pub mod user_auth;

// Convenient re-exports at crate root
pub use authz::Principal;
pub use cards::{Card, CardService, CardStatus};
pub use db::Database;
pub use error::{CoreError, CoreResult};
pub use pagination::{Page, PageQuery};
pub use transfers::{Transaction, TransactionStatus, TransferService};
pub use user_auth::UserAuthService;
pub use users::{Role, User, UserService, UserStatus};
