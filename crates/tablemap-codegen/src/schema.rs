mod entity;
pub(crate) use entity::Entity;

mod entity_attr;
pub(crate) use entity_attr::EntityAttr;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, Role};
