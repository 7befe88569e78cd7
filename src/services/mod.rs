pub mod auth_service;
pub mod inventory_service;
pub mod provisioning_service;
pub mod verification_service;
pub mod wallet_service;

pub use auth_service::AuthService;
pub use inventory_service::InventoryService;
pub use provisioning_service::ProvisioningService;
pub use verification_service::VerificationService;
pub use wallet_service::WalletService;
