use proptest::prelude::*;

use iou_contracts::{
    CommandData, CommandWithSigners, Contract, ContractVerifier, IouDestroyContract,
    RejectionReason, TransactionView,
};
use iou_utils::LogConfig;
use iou_types::{GenericState, IouState, LedgerState, Party, PartyRef, PublicKey};

fn party(name: &str, seed: u8) -> PartyRef {
    let keys = iou_crypto::keypair_from_seed(&[seed; 32]);
    Party::shared(name, keys.public).unwrap()
}

fn lender() -> PartyRef {
    party("Lender", 1)
}

fn borrower() -> PartyRef {
    party("Borrower", 2)
}

fn destroy(signers: &[&PartyRef]) -> CommandWithSigners {
    CommandWithSigners::new(CommandData::Destroy, signers.iter().map(|p| *p.owning_key()))
}

fn iou(lender: &PartyRef, borrower: &PartyRef, value: i64) -> LedgerState {
    IouState::new(lender.clone(), borrower.clone(), value).into()
}

fn any_state() -> impl Strategy<Value = LedgerState> {
    prop_oneof![
        any::<i64>().prop_map(|v| iou(&lender(), &borrower(), v)),
        "[a-z]{1,8}".prop_map(|id| LedgerState::Generic(GenericState {
            contract_id: id,
            participants: vec![lender()],
        })),
    ]
}

#[test]
fn accepts_signed_positive_iou() {
    let (a, b) = (lender(), borrower());
    let tx = TransactionView::new(vec![iou(&a, &b, 100)], vec![], vec![destroy(&[&a, &b])]);
    assert_eq!(IouDestroyContract.verify(&tx), Ok(()));
}

#[test]
fn rejects_zero_value() {
    let (a, b) = (lender(), borrower());
    let tx = TransactionView::new(vec![iou(&a, &b, 0)], vec![], vec![destroy(&[&a, &b])]);
    assert_eq!(
        IouDestroyContract.verify(&tx),
        Err(RejectionReason::NonPositiveValue { value: 0 })
    );
}

#[test]
fn rejects_lender_only_signature() {
    let (a, b) = (lender(), borrower());
    let tx = TransactionView::new(vec![iou(&a, &b, 100)], vec![], vec![destroy(&[&a])]);
    assert_eq!(
        IouDestroyContract.verify(&tx),
        Err(RejectionReason::MissingSignatures { missing: 1 })
    );
}

#[test]
fn verifier_logs_rejection_through_configured_subscriber() {
    let config = LogConfig::from_toml_str("level = \"debug\"").unwrap();
    let _ = config.init();

    let (a, b) = (lender(), borrower());
    let verifier = ContractVerifier::with_iou_contracts();
    let ok = TransactionView::new(vec![iou(&a, &b, 100)], vec![], vec![destroy(&[&a, &b])]);
    let bad = TransactionView::new(vec![iou(&a, &b, 100)], vec![], vec![destroy(&[&b])]);

    assert!(verifier.verify(&ok).is_ok());
    let err = verifier.verify(&bad).unwrap_err();
    assert_eq!(
        err.reason(),
        Some(&RejectionReason::MissingSignatures { missing: 1 })
    );
}

proptest! {
    /// Any output at all is rejected, whatever the inputs and signers look like.
    #[test]
    fn outputs_always_rejected(
        value in any::<i64>(),
        extra_inputs in prop::collection::vec(any_state(), 0..3),
        with_iou_input in any::<bool>(),
        outputs in prop::collection::vec(any_state(), 1..4),
        lender_signs in any::<bool>(),
    ) {
        let (a, b) = (lender(), borrower());
        let signers: Vec<&PartyRef> = if lender_signs { vec![&a, &b] } else { vec![&b] };
        let count = outputs.len();
        let inputs = if with_iou_input {
            let mut inputs = vec![iou(&a, &b, value)];
            inputs.extend(extra_inputs);
            inputs
        } else {
            // Empty, or IOUs only: inputs with no IOU fail the type check before outputs.
            extra_inputs.into_iter().filter(|s| s.as_iou().is_some()).collect()
        };
        let tx = TransactionView::new(inputs, outputs, vec![destroy(&signers)]);
        prop_assert_eq!(
            IouDestroyContract.verify(&tx),
            Err(RejectionReason::UnexpectedOutput { count })
        );
    }

    /// More than one input is rejected once the first IOU input is found.
    #[test]
    fn extra_inputs_rejected(value in any::<i64>(), extra in prop::collection::vec(any_state(), 1..4)) {
        let (a, b) = (lender(), borrower());
        let mut inputs = vec![iou(&a, &b, value)];
        inputs.extend(extra);
        let count = inputs.len();
        let tx = TransactionView::new(inputs, vec![], vec![destroy(&[&a, &b])]);
        prop_assert_eq!(
            IouDestroyContract.verify(&tx),
            Err(RejectionReason::WrongInputCount { count })
        );
    }

    /// An IOU whose lender and borrower are one identity is rejected.
    #[test]
    fn self_dealing_rejected(value in any::<i64>()) {
        let a = lender();
        let tx = TransactionView::new(vec![iou(&a, &a, value)], vec![], vec![destroy(&[&a])]);
        prop_assert_eq!(IouDestroyContract.verify(&tx), Err(RejectionReason::SelfDealingIou));
    }

    /// Non-positive values are rejected even when fully signed.
    #[test]
    fn non_positive_value_rejected(value in i64::MIN..=0) {
        let (a, b) = (lender(), borrower());
        let tx = TransactionView::new(vec![iou(&a, &b, value)], vec![], vec![destroy(&[&a, &b])]);
        prop_assert_eq!(
            IouDestroyContract.verify(&tx),
            Err(RejectionReason::NonPositiveValue { value })
        );
    }

    /// Leaving out any participant's key is rejected, extra signers notwithstanding.
    #[test]
    fn missing_participant_key_rejected(
        value in any::<i64>(),
        drop_lender in any::<bool>(),
        extra_keys in prop::collection::vec(10u8..=255, 0..4),
    ) {
        let (a, b) = (lender(), borrower());
        let kept = if drop_lender { &b } else { &a };
        let mut signers = vec![*kept.owning_key()];
        signers.extend(extra_keys.into_iter().map(|k| PublicKey([k; 32])));
        let cmd = CommandWithSigners::new(CommandData::Destroy, signers);
        let tx = TransactionView::new(vec![iou(&a, &b, value)], vec![], vec![cmd]);
        prop_assert_eq!(
            IouDestroyContract.verify(&tx),
            Err(RejectionReason::MissingSignatures { missing: 1 })
        );
    }

    /// Every fully signed, positive, single-input cancellation is accepted.
    #[test]
    fn positive_signed_destroy_accepted(value in 1i64..=i64::MAX) {
        let (a, b) = (lender(), borrower());
        let tx = TransactionView::new(vec![iou(&a, &b, value)], vec![], vec![destroy(&[&a, &b])]);
        prop_assert_eq!(IouDestroyContract.verify(&tx), Ok(()));
    }
}
