mod pool;
mod store;

pub use pool::create_pool;
pub use store::PgStore;
