pub mod address;
pub mod contact;
