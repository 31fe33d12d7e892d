pub use super::client::Entity as Client;
pub use super::inventory_item::Entity as InventoryItem;
pub use super::labor_line::Entity as LaborLine;
pub use super::part_line::Entity as PartLine;
pub use super::service_order::Entity as ServiceOrder;
pub use super::user::Entity as User;
