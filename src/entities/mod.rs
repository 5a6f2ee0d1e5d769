pub mod inventory_item;
pub mod order;
pub mod order_item;
