mod models;

use crate::UserRecord;

pub(crate) fn sample_record(email: &str, password: &str) -> UserRecord {
    UserRecord::new("Ada", "Lovelace", email, password, "10/12/1815", "+44 7700900123")
}
