pub mod alert;
pub mod controls;
pub mod map;
