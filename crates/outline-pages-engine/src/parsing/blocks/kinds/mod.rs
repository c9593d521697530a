pub mod block_quote;
pub mod block_ref;
pub mod bullet;
pub mod property;

pub use block_quote::BlockQuote;
pub use block_ref::BlockRef;
pub use bullet::Bullet;
pub use property::Property;
