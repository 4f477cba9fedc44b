use polaris_secret::{Redact, Redactable, SecretString};

#[derive(Debug, PartialEq, Redact)]
enum Credential {
    None,
    Basic { username: String, password: SecretString },
    Bearer(SecretString),
    Opaque(#[redact(skip)] std::time::Duration),
}

#[derive(Redact)]
enum Never {}

fn main() {
    let redacted = Credential::Bearer("abc".into()).redact();
    assert_eq!(redacted, Credential::Bearer("REDACTED".into()));
    assert_eq!(Credential::None.redact(), Credential::None);
    let _ = std::marker::PhantomData::<Never>;
}
