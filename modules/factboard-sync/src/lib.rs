pub mod board;
pub mod fetcher;
pub mod gate;
pub mod reconciler;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;
pub mod validator;

#[cfg(test)]
mod sync_tests;

pub use board::FactBoard;
pub use fetcher::Fetcher;
pub use gate::{MutationGate, MutationPermit};
pub use store::SupabaseFactStore;
pub use traits::FactStore;
