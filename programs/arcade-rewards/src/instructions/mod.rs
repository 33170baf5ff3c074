pub mod admin;
pub mod initialize;
pub mod play;
pub mod submit_score;
pub mod update_price;
pub mod view;

pub use admin::*;
pub use initialize::*;
pub use play::*;
pub use submit_score::*;
pub use update_price::*;
pub use view::*;
