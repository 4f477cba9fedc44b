use std::collections::HashMap;

use polaris_secret::{Redact, SecretString, redact};

#[derive(Redact)]
struct RsaKey {
    pub key_id: String,
    pub private_key: SecretString,
}

#[derive(Redact)]
struct Account<K> {
    pub name: String,
    pub keys: HashMap<String, K>,
    #[redact(skip)]
    pub created: std::sync::atomic::AtomicBool,
    region: String,
}

fn main() {
    let account = Account {
        name: "prod".to_string(),
        keys: HashMap::from([(
            "primary".to_string(),
            RsaKey {
                key_id: "k1".to_string(),
                private_key: SecretString::from("-----BEGIN"),
            },
        )]),
        created: std::sync::atomic::AtomicBool::new(true),
        region: "us-east-1".to_string(),
    };
    let redacted = redact(account, &[]);
    assert_eq!(redacted.keys["primary"].private_key, "REDACTED");
    assert!(redacted.region.is_empty());
}
