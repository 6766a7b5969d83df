pub mod notification;
pub mod text;
