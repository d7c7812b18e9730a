pub mod fields;
pub mod money;
pub mod profiles;
