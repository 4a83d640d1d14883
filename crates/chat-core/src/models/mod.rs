pub mod account_collection;
pub mod profile;
pub mod required_field;
pub mod user_record;
