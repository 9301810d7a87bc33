// Homepage sections

mod bio;
mod external_link;
mod posts;

pub use bio::Bio;
pub use posts::Posts;
