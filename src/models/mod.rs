//! Value records carried by a `Metadata` snapshot.
//!
//! Records with an identifying field (`href` / `url`) can only be constructed
//! with that field non-empty.

mod favicon;
mod feed;
mod media;
mod microdata;
mod one_or_many;

pub use favicon::Favicon;
pub use feed::Feed;
pub use media::{Image, OpenGraphMedia, Video};
pub use microdata::{MicrodataItem, MicrodataValue};
pub use one_or_many::OneOrMany;
