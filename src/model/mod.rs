mod link;
mod resource;

pub(crate) use link::canonical_name;
pub use link::{Link, REL, TITLE, TYPE};
pub use resource::{FieldSource, Resource};
