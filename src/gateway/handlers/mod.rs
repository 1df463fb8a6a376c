//! HTTP handlers
//!
//! Thin layer over the services: extract, predicate-gate, delegate,
//! wrap in the response envelope. No business rules live here.

pub mod auth;
pub mod cards;
pub mod health;
pub mod transfers;
pub mod users;

pub use auth::{login, register};
pub use cards::{
    create_card, delete_card, get_card, list_all_cards, list_user_cards, update_card_status,
};
pub use health::{HealthResponse, health_check};
pub use transfers::{create_transfer, list_card_transfers, list_transfers, list_user_transfers};
pub use users::{delete_user, get_me, get_user, list_users, update_user_status};
