mod account_collection;
mod profile;
mod user_record;
