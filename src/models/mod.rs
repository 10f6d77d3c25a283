//! Data holders mirroring the API's JSON schemas.
//!
//! Every field is optional and unset fields are omitted when serializing, so
//! a value deserialized from a server response serializes back to the same
//! JSON. Keys the schema does not know are kept in the flattened `extra` map
//! and survive the round trip too.

pub mod common;
pub mod division;
pub mod favorite;
pub mod floor;
pub mod hole;
pub mod message;
pub mod punishment;
pub mod report;
pub mod tag;
pub mod user;

pub use common::{ErrorDetailElement, HttpError, MessageModel};
pub use division::Division;
pub use favorite::FavoriteGroup;
pub use floor::{BanDivision, Floor, FloorHistory, SensitiveFloor};
pub use hole::{DeletedAt, Hole, HoleFloors};
pub use message::{Message, MessageType};
pub use punishment::Punishment;
pub use report::Report;
pub use tag::Tag;
pub use user::{User, UserConfig, UserPermission};
