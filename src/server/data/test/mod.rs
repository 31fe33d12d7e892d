mod inventory;
mod service_order;
mod user;
