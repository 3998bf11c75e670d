//! Property-based tests for upsig

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use proptest::prelude::*;
use upsig::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        any::<String>().prop_map(Value::from),
    ];

    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z][a-z0-9_]{0,8}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn payload_strategy() -> impl Strategy<Value = Payload> {
    prop::collection::vec(("[a-z][a-z0-9_]{0,8}", value_strategy()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

// Printable ASCII secrets; NUL-free so distinct strings are distinct HMAC keys
fn secret_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,24}"
}

proptest! {
    #[test]
    fn props_sign_is_deterministic(
        payload in payload_strategy(),
        secret in secret_strategy()
    ) {
        let first = sign(&payload, &secret).unwrap();
        let second = sign(&payload, &secret).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn props_token_uses_url_safe_alphabet(
        payload in payload_strategy(),
        secret in secret_strategy()
    ) {
        let token = sign(&payload, &secret).unwrap();
        prop_assert!(token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'));
    }

    #[test]
    fn props_token_has_exactly_one_separator(
        payload in payload_strategy(),
        secret in secret_strategy()
    ) {
        let token = sign(&payload, &secret).unwrap();
        prop_assert_eq!(token.as_str().matches('.').count(), 1);
    }

    #[test]
    fn props_distinct_secrets_give_distinct_signatures(
        payload in payload_strategy(),
        secret_one in secret_strategy(),
        secret_two in secret_strategy()
    ) {
        prop_assume!(secret_one != secret_two);

        let one = sign(&payload, &secret_one).unwrap();
        let two = sign(&payload, &secret_two).unwrap();

        prop_assert_eq!(one.encoded_payload(), two.encoded_payload());
        prop_assert_ne!(one.encoded_signature(), two.encoded_signature());
    }

    #[test]
    fn props_payload_round_trips_through_token(
        payload in payload_strategy(),
        secret in secret_strategy()
    ) {
        // What a verifying counterpart does: split on '.', base64url-decode
        // the first segment, JSON-parse it back into a structure.
        let token = sign(&payload, &secret).unwrap();
        let raw = URL_SAFE_NO_PAD.decode(token.encoded_payload()).unwrap();
        let decoded: Value = serde_json::from_slice(&raw).unwrap();

        prop_assert_eq!(decoded, Value::Object(payload));
    }

    #[test]
    fn props_signature_covers_encoded_payload(
        payload in payload_strategy(),
        secret in secret_strategy(),
        probe in any::<u64>()
    ) {
        // Adding a fresh field changes the payload segment and, because the
        // signature covers the encoded payload, the signature segment too.
        let base = sign(&payload, &secret).unwrap();

        let mut changed = payload.clone();
        // key starts with an uppercase letter, so the strategy cannot generate it
        changed.insert("Probe", probe);
        let token = sign(&changed, &secret).unwrap();

        prop_assert_ne!(base.encoded_payload(), token.encoded_payload());
        prop_assert_ne!(base.encoded_signature(), token.encoded_signature());
    }

    #[test]
    fn props_non_finite_floats_are_rejected(
        payload in payload_strategy(),
        bad in prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY)
        ]
    ) {
        let mut poisoned = payload;
        poisoned.insert("zz_bad", bad);

        let result = sign(&poisoned, "secret");
        prop_assert!(matches!(result, Err(UpsigError::NonFiniteNumber(_))));
    }

    #[test]
    fn props_signer_matches_free_function(
        payload in payload_strategy(),
        secret in secret_strategy()
    ) {
        let signer = TokenSigner::new(&secret).unwrap();
        prop_assert_eq!(signer.sign(&payload).unwrap(), sign(&payload, &secret).unwrap());
    }
}
