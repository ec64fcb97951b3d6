pub mod card;
pub mod response;
pub mod skin;

pub use card::*;
pub use response::*;
pub use skin::*;
