//! Transfer engine and transaction ledger.

pub mod models;
pub mod repository;
pub mod service;
pub mod validate;

pub use models::{Transaction, TransactionStatus};
pub use repository::TransactionRepository;
pub use service::TransferService;
pub use validate::validate_transfer;
