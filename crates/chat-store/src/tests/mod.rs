mod storage;

use chat_core::UserRecord;

pub(crate) fn record(email: &str, password: &str) -> UserRecord {
    UserRecord::new("Grace", "Hopper", email, password, "9/12/1906", "+1 5550100")
}
