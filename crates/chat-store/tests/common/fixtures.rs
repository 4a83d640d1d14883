use chat_core::UserRecord;

/// Creates a fully populated UserRecord
pub fn create_test_user(email: &str, password: &str) -> UserRecord {
    UserRecord::new(
        "Test",
        "User",
        email,
        password,
        "1/1/2000",
        "+1 5550100",
    )
}

/// Creates `count` users with distinct emails `user{n}@example.com`
pub fn create_test_users(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|n| {
            let mut user = create_test_user(&format!("user{n}@example.com"), &format!("pw{n}"));
            user.first_name = format!("User{n}");
            user
        })
        .collect()
}
