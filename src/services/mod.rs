pub mod catalogue;
pub mod chart;
pub mod creators;
pub(crate) mod credits;
pub mod events;
pub mod hashids;
pub mod naturalize;
pub mod publications;
pub mod readings;
pub mod slug;
pub mod text;
pub mod text_slug;
pub mod venues;
pub mod works;
