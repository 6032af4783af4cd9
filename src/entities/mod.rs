//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod extra;
pub mod extra_option;
pub mod order;
pub mod order_item;
pub mod order_item_extra;
pub mod product;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use extra::{Column as ExtraColumn, Entity as Extra, Model as ExtraModel};
pub use extra_option::{
    Column as ExtraOptionColumn, Entity as ExtraOption, Model as ExtraOptionModel,
};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use order_item::{Column as OrderItemColumn, Entity as OrderItem, Model as OrderItemModel};
pub use order_item_extra::{
    Column as OrderItemExtraColumn, Entity as OrderItemExtra, Model as OrderItemExtraModel,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
