pub mod inventory;
pub mod transaction;
pub mod user;
pub mod virtual_account;
pub mod wallet;
