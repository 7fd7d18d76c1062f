pub mod account;
pub mod catalog;
pub mod session;

pub use account::SqliteAccountRepository;
pub use catalog::SqliteCatalogRepository;
pub use session::SqliteSessionRepository;
