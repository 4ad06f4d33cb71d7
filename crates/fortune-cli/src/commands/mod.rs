pub mod files;
pub mod pick;
