pub mod contact;
pub mod map;
pub mod shell;
