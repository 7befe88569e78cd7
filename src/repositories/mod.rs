pub mod inventory_repository;
pub mod transaction_repository;
pub mod user_repository;
pub mod virtual_account_repository;
pub mod wallet_repository;

pub use inventory_repository::InventoryRepository;
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;
pub use virtual_account_repository::VirtualAccountRepository;
pub use wallet_repository::WalletRepository;
