pub mod modal;
pub mod observers;
pub mod todo;
