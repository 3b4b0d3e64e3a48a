/*
[INPUT]:  Credential fields and fixed signing inputs
[OUTPUT]: Test results for credential validation and token signing
[POS]:    Integration tests - authentication
[UPDATE]: When credential rules or token format change
*/

mod common;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use common::test_credential;
use rstest::rstest;
use tokio_test::assert_ok;
use youtu_adapter::{Credential, RequestSigner, USER_ID_MAX_LEN, YoutuClient, YoutuError};

#[rstest]
#[case(USER_ID_MAX_LEN, true)]
#[case(USER_ID_MAX_LEN + 1, false)]
fn test_user_id_boundary(#[case] len: usize, #[case] ok: bool) {
    let result = Credential::new(1, "k", "s", 0, "x".repeat(len));
    match result {
        Ok(credential) => {
            assert!(ok);
            assert_eq!(credential.user_id().len(), len);
        }
        Err(err) => {
            assert!(!ok);
            assert!(matches!(err, YoutuError::Validation(_)));
        }
    }
}

#[test]
fn test_canonical_string_reference_vector() {
    let credential = assert_ok!(Credential::new(1, "k", "secret", 100, "u"));
    let signer = RequestSigner::new(credential);
    assert_eq!(
        signer.canonical_string(1000, 5),
        "a=1&k=k&e=100&t=1000&r=5&u=u&f="
    );
}

#[test]
fn test_token_reference_vector() {
    let credential = assert_ok!(Credential::new(1, "k", "secret", 100, "u"));
    let signer = RequestSigner::new(credential);
    assert_eq!(
        signer.sign_at(1000, 5),
        "kXIFADshkXaRMC66pCLZ9Ypz4FBhPTEmaz1rJmU9MTAwJnQ9MTAwMCZyPTUmdT11JmY9"
    );
}

#[test]
fn test_token_depends_on_secret_key() {
    let a = RequestSigner::new(assert_ok!(Credential::new(1, "k", "secret-a", 100, "u")));
    let b = RequestSigner::new(assert_ok!(Credential::new(1, "k", "secret-b", 100, "u")));

    let token_a = BASE64.decode(a.sign_at(1000, 5)).unwrap();
    let token_b = BASE64.decode(b.sign_at(1000, 5)).unwrap();

    assert_ne!(token_a[..20], token_b[..20]);
    assert_eq!(token_a[20..], token_b[20..]);
}

#[test]
fn test_fresh_tokens_differ() {
    let client = assert_ok!(YoutuClient::new(test_credential()));
    let signer = client.signer();
    let tokens: std::collections::HashSet<String> = (0..16).map(|_| signer.sign()).collect();
    // 16 draws from a 31-bit nonce space within the same second
    assert!(tokens.len() > 1);
}

#[test]
fn test_token_never_contains_secret_key() {
    let signer = RequestSigner::new(test_credential());
    let decoded = BASE64.decode(signer.sign()).unwrap();
    let tail = String::from_utf8_lossy(&decoded[20..]).into_owned();
    assert!(!tail.contains("test-secret-key"));
    assert!(tail.starts_with("a=1000061&k=AKIDtest&e=0&t="));
    assert!(tail.ends_with("&u=3041722595&f="));
}
