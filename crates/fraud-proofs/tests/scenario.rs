//! Challenges against a hub that has dispatched 65 messages.

use std::sync::Arc;

use hubwatch_fraud_proofs::{Challenge, FraudKind, FraudProofError, FraudProofVerifier, Verdict};
use hubwatch_primitives::{DomainId, LogId, LogKey};
use hubwatch_state_store::CanonicalStateStore;
use hubwatch_test_utils::{TestHub, message_id};

const LOCAL: DomainId = DomainId::new(1000);

fn setup() -> (TestHub, FraudProofVerifier) {
    let key = LogKey::new(LOCAL, LogId::from_address([0xab; 20]));
    let hub = TestHub::with_messages(key, 65);
    let store = Arc::new(CanonicalStateStore::new());
    hub.snapshot_into(&store);
    (hub, FraudProofVerifier::new(LOCAL, store))
}

#[test]
fn test_snapshot_matches_latest_checkpoint() {
    let (hub, verifier) = setup();
    let ck = hub.latest_checkpoint().unwrap();
    assert_eq!(ck.index(), 64);

    let stored = verifier.store().get(&hub.key()).unwrap();
    assert_eq!(stored.count(), 65);
    assert_eq!(stored.root(), ck.root());
}

#[test]
fn test_honest_latest_checkpoint() {
    let (hub, verifier) = setup();
    let ck = hub.latest_checkpoint().unwrap();
    let proof = hub.proof(64);

    assert_eq!(verifier.is_premature(&ck), Ok(false));
    assert_eq!(
        verifier.is_fraudulent_message_id(&ck, &proof, message_id(64)),
        Ok(false)
    );
    assert_eq!(verifier.is_fraudulent_root(&ck, &proof), Ok(false));
}

#[test]
fn test_complemented_message_id() {
    let (hub, verifier) = setup();
    let ck = hub
        .latest_checkpoint()
        .unwrap()
        .with_message_id(!message_id(64));
    let proof = hub.proof(64);

    assert_eq!(
        verifier.is_fraudulent_message_id(&ck, &proof, message_id(64)),
        Ok(true)
    );
    assert_eq!(
        verifier.is_fraudulent_root(&ck, &proof),
        Err(FraudProofError::NotMemberOfStoredCheckpoint {
            log: hub.key(),
            index: 64,
        })
    );
}

#[test]
fn test_index_past_count_is_premature() {
    let (hub, verifier) = setup();
    let ck = hub.latest_checkpoint().unwrap().with_index(65);
    assert_eq!(
        verifier.adjudicate(&ck, &Challenge::Premature),
        Ok(Verdict::Fraudulent(FraudKind::Premature))
    );
}

#[test]
fn test_earlier_leaf_against_stored_root() {
    let (hub, verifier) = setup();
    let honest = hub
        .latest_checkpoint()
        .unwrap()
        .with_index(17)
        .with_message_id(message_id(17));
    let proof = hub.proof(17);

    assert_eq!(verifier.is_fraudulent_root(&honest, &proof), Ok(false));

    let forged = honest.with_root(message_id(999));
    assert_eq!(
        verifier.adjudicate(&forged, &Challenge::Root { proof }),
        Ok(Verdict::Fraudulent(FraudKind::Root))
    );
}

#[test]
fn test_refresh_moves_the_baseline() {
    let (mut hub, verifier) = setup();
    let old = hub.latest_checkpoint().unwrap();

    hub.dispatch_n(3);
    let fresh = hub.latest_checkpoint().unwrap();

    // Not yet refreshed: the new leaf is past the stored count.
    assert_eq!(verifier.is_premature(&fresh), Ok(true));

    hub.snapshot_into(verifier.store());
    assert_eq!(verifier.is_premature(&fresh), Ok(false));
    assert_eq!(verifier.is_fraudulent_root(&fresh, &hub.proof(67)), Ok(false));

    // A proof taken against the old tree no longer reproduces the stored root.
    let stale_proof = TestHub::with_messages(hub.key(), 65).proof(64);
    assert!(matches!(
        verifier.is_fraudulent_root(&old, &stale_proof),
        Err(FraudProofError::NotMemberOfStoredCheckpoint { index: 64, .. })
    ));
}
