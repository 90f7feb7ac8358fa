use chrono::NaiveDate;
use proptest::prelude::*;
use risk_profile::policies::{
    ApplicantProfile, House, InsuranceLine, MaritalStatus, OwnershipStatus, RiskEngine, RiskTier,
    ScoringConfig, Vehicle,
};

fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date")
}

fn rank(tier: RiskTier) -> u8 {
    match tier {
        RiskTier::Economic => 0,
        RiskTier::Regular => 1,
        RiskTier::Responsible => 2,
        RiskTier::Ineligible => 3,
    }
}

fn ownership() -> impl Strategy<Value = OwnershipStatus> {
    prop_oneof![
        Just(OwnershipStatus::Owned),
        Just(OwnershipStatus::Mortgaged),
        Just(OwnershipStatus::Rented),
    ]
}

fn profiles() -> impl Strategy<Value = ApplicantProfile> {
    (
        0u32..100,
        0u32..5,
        prop_oneof![Just(0u64), 1u64..400_000],
        any::<bool>(),
        proptest::collection::vec(0u8..=1, 3),
        proptest::option::of(ownership()),
        proptest::option::of(1990i32..2030),
    )
        .prop_map(
            |(age, dependents, income, married, risk_answers, house, vehicle)| ApplicantProfile {
                age,
                dependents,
                income,
                marital_status: if married {
                    MaritalStatus::Married
                } else {
                    MaritalStatus::Single
                },
                risk_answers,
                house: house.map(|ownership_status| House { ownership_status }),
                vehicle: vehicle.map(|year| Vehicle { year }),
            },
        )
}

proptest! {
    #[test]
    fn scores_stay_within_bounds_after_every_rule(profile in profiles()) {
        let assessment = RiskEngine::default().evaluate(&profile, evaluation_date());

        for applied in &assessment.adjustments {
            prop_assert!(
                applied.scores_after.within_bounds(),
                "{:?} left {:?}",
                applied.rule,
                applied.scores_after
            );
        }
        prop_assert!(assessment.scores.within_bounds());
    }

    #[test]
    fn response_always_carries_four_known_tiers(profile in profiles()) {
        let response = RiskEngine::default().assess(&profile, evaluation_date());
        let payload = serde_json::to_value(response).expect("serializes");
        let object = payload.as_object().expect("json object");

        prop_assert_eq!(object.len(), 4);
        for line in InsuranceLine::ALL {
            let tier = object.get(line.label()).and_then(|value| value.as_str());
            prop_assert!(
                matches!(tier, Some("economic" | "regular" | "responsible" | "ineligible")),
                "{} had {:?}",
                line.label(),
                tier
            );
        }
    }

    #[test]
    fn another_risky_answer_never_lowers_a_line(profile in profiles(), slot in 0usize..3) {
        prop_assume!(profile.risk_answers[slot] == 0);
        let engine = RiskEngine::default();
        let mut riskier = profile.clone();
        riskier.risk_answers[slot] = 1;

        let before = engine.evaluate(&profile, evaluation_date());
        let after = engine.evaluate(&riskier, evaluation_date());

        for line in InsuranceLine::ALL {
            prop_assert!(after.scores.get(line) >= before.scores.get(line));
            prop_assert!(
                rank(after.scored_tiers.get(line)) >= rank(before.scored_tiers.get(line))
            );
        }
    }

    #[test]
    fn ineligibility_wins_over_any_score(profile in profiles()) {
        let config = ScoringConfig::default();
        let response = RiskEngine::new(config.clone()).assess(&profile, evaluation_date());

        if profile.income == 0 {
            prop_assert_eq!(response.disability, RiskTier::Ineligible);
        }
        if profile.vehicle.is_none() {
            prop_assert_eq!(response.auto, RiskTier::Ineligible);
        }
        if profile.house.is_none() {
            prop_assert_eq!(response.home, RiskTier::Ineligible);
        }
        if profile.age > config.senior_age_limit {
            prop_assert_eq!(response.life, RiskTier::Ineligible);
            prop_assert_eq!(response.disability, RiskTier::Ineligible);
        }
    }

    #[test]
    fn lines_without_an_override_keep_their_scored_tier(profile in profiles()) {
        let assessment = RiskEngine::default().evaluate(&profile, evaluation_date());

        for line in InsuranceLine::ALL {
            let overridden = assessment
                .ineligibility
                .iter()
                .any(|reason| reason.lines().contains(&line));
            if !overridden {
                prop_assert_eq!(
                    assessment.response.get(line),
                    assessment.scored_tiers.get(line)
                );
                prop_assert_ne!(assessment.response.get(line), RiskTier::Ineligible);
            }
        }
    }

    #[test]
    fn evaluation_is_repeatable_for_a_fixed_date(profile in profiles()) {
        let engine = RiskEngine::default();
        prop_assert_eq!(
            engine.evaluate(&profile, evaluation_date()),
            engine.evaluate(&profile, evaluation_date())
        );
    }
}
