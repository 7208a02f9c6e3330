pub mod checkout;
pub mod fs_cache;
