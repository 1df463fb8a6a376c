//! Card store and lifecycle manager.

pub mod models;
pub mod repository;
pub mod service;

pub use models::{CARD_EXPIRY_YEARS, Card, CardStatus, normalize_status};
pub use repository::CardRepository;
pub use service::CardService;
