//! # Synthetic Policy Data
//!
//! Placeholder [`PolicyDataProvider`] that fabricates plausible payloads with
//! `rand`. Nothing is looked up or stored: two calls for the same policy
//! return independently generated values. The distributions below are demo
//! values, not business rules.
//!
//! Each category has a pure `generate_*` function taking the RNG and the
//! current time, so tests can drive generation from a seeded RNG.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ProviderError;
use crate::identity::PolicyId;
use crate::policy::{
    Beneficiary, BeneficiaryInfo, ClaimsBalance, CoverageDetails, CoverageLine, MedicalHistory,
    PaymentMethod, PaymentStatus, PolicyState, PolicyStatus, PremiumInfo,
};
use crate::provider::PolicyDataProvider;
use crate::temporal::Timestamp;

/// Total benefit pool for every synthetic policy.
pub const TOTAL_BENEFITS: u64 = 500_000;

/// Upper bound on year-to-date claims.
pub const MAX_CLAIMS_YTD: u64 = 150_000;

/// Annual premium tiers.
pub const PREMIUM_TIERS: [u64; 5] = [1_200, 1_800, 2_400, 3_000, 3_600];

/// Conditions sampled for medical history; `None` means "no condition".
const CONDITION_POOL: [&str; 4] = ["Diabetes", "Hypertension", "Asthma", "None"];

const NON_ACTIVE_STATES: [PolicyState; 3] = [
    PolicyState::Pending,
    PolicyState::Suspended,
    PolicyState::Expired,
];

const PAYMENT_METHODS: [PaymentMethod; 3] = [
    PaymentMethod::CreditCard,
    PaymentMethod::BankTransfer,
    PaymentMethod::Check,
];

/// Stateless provider backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticProvider;

impl SyntheticProvider {
    /// Create a synthetic provider.
    pub fn new() -> Self {
        Self
    }
}

impl PolicyDataProvider for SyntheticProvider {
    fn policy_status(&self, policy_id: &PolicyId) -> Result<PolicyStatus, ProviderError> {
        Ok(generate_status(
            &mut rand::thread_rng(),
            policy_id,
            Timestamp::now(),
        ))
    }

    fn claims_balance(&self, policy_id: &PolicyId) -> Result<ClaimsBalance, ProviderError> {
        Ok(generate_claims(
            &mut rand::thread_rng(),
            policy_id,
            Timestamp::now(),
        ))
    }

    fn premium_info(&self, policy_id: &PolicyId) -> Result<PremiumInfo, ProviderError> {
        Ok(generate_premium(
            &mut rand::thread_rng(),
            policy_id,
            Timestamp::now(),
        ))
    }

    fn coverage_details(&self, policy_id: &PolicyId) -> Result<CoverageDetails, ProviderError> {
        Ok(generate_coverage(
            &mut rand::thread_rng(),
            policy_id,
            Timestamp::now(),
        ))
    }

    fn beneficiaries(&self, policy_id: &PolicyId) -> Result<BeneficiaryInfo, ProviderError> {
        Ok(generate_beneficiaries(policy_id, Timestamp::now()))
    }

    fn medical_history(&self, policy_id: &PolicyId) -> Result<MedicalHistory, ProviderError> {
        Ok(generate_medical_history(
            &mut rand::thread_rng(),
            policy_id,
            Timestamp::now(),
        ))
    }
}

/// Status is `Active` two times in three; otherwise one of the other states.
pub fn generate_status<R: Rng>(
    rng: &mut R,
    policy_id: &PolicyId,
    now: Timestamp,
) -> PolicyStatus {
    let state = if rng.gen_bool(2.0 / 3.0) {
        PolicyState::Active
    } else {
        NON_ACTIVE_STATES[rng.gen_range(0..NON_ACTIVE_STATES.len())]
    };
    PolicyStatus::new(policy_id.clone(), state, rng.gen_range(30..=365), now)
}

/// Claims drawn from `0..=MAX_CLAIMS_YTD`, last claim 1 to 120 days ago.
pub fn generate_claims<R: Rng>(
    rng: &mut R,
    policy_id: &PolicyId,
    now: Timestamp,
) -> ClaimsBalance {
    let claims_made = rng.gen_range(0..=MAX_CLAIMS_YTD);
    let last_claim = now.offset_days(-rng.gen_range(1..=120));
    ClaimsBalance::new(policy_id.clone(), TOTAL_BENEFITS, claims_made, last_claim, now)
}

/// Premium tier picked uniformly, paid nine times in ten.
pub fn generate_premium<R: Rng>(
    rng: &mut R,
    policy_id: &PolicyId,
    now: Timestamp,
) -> PremiumInfo {
    let annual_premium = PREMIUM_TIERS[rng.gen_range(0..PREMIUM_TIERS.len())];
    let days_until_due: u32 = rng.gen_range(1..=30);
    let payment_status = if rng.gen_bool(0.9) {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Pending
    };
    PremiumInfo {
        policy_id: policy_id.clone(),
        annual_premium,
        monthly_premium: PremiumInfo::monthly_from_annual(annual_premium),
        payment_status,
        days_until_next_payment: days_until_due,
        next_due_date: now.offset_days(i64::from(days_until_due)),
        last_payment_date: now.offset_days(-rng.gen_range(1..=30)),
        payment_method: PAYMENT_METHODS[rng.gen_range(0..PAYMENT_METHODS.len())],
        timestamp: now,
    }
}

/// Four fixed coverage types; medical and critical-illness usage is random.
pub fn generate_coverage<R: Rng>(
    rng: &mut R,
    policy_id: &PolicyId,
    now: Timestamp,
) -> CoverageDetails {
    CoverageDetails {
        policy_id: policy_id.clone(),
        coverages: vec![
            CoverageLine::active("Medical Coverage", 500_000, rng.gen_range(0..=100_000)),
            CoverageLine::active("Accidental Death & Dismemberment", 250_000, 0),
            CoverageLine::active("Critical Illness", 100_000, rng.gen_range(0..=50_000)),
            CoverageLine::active("Disability Income", 5_000, 0),
        ],
        timestamp: now,
    }
}

/// Three fixed beneficiaries whose shares sum to 100.
pub fn generate_beneficiaries(policy_id: &PolicyId, now: Timestamp) -> BeneficiaryInfo {
    let beneficiary = |name: &str, relationship: &str, percentage: u8, contact: &str| Beneficiary {
        name: name.to_string(),
        relationship: relationship.to_string(),
        percentage,
        contact: contact.to_string(),
    };
    BeneficiaryInfo::new(
        policy_id.clone(),
        vec![
            beneficiary("Jane Doe", "Spouse", 50, "jane.doe@email.com"),
            beneficiary("John Doe Jr.", "Child", 25, "john.jr@email.com"),
            beneficiary("Mary Smith", "Mother", 25, "mary.smith@email.com"),
        ],
        now,
    )
}

/// One or two entries sampled from the condition pool.
///
/// Drawing `None` means the holder declared no conditions at all.
pub fn generate_medical_history<R: Rng>(
    rng: &mut R,
    policy_id: &PolicyId,
    now: Timestamp,
) -> MedicalHistory {
    let count = rng.gen_range(1..=2);
    let drawn: Vec<&str> = CONDITION_POOL
        .choose_multiple(rng, count)
        .copied()
        .collect();
    let conditions = if drawn.contains(&"None") {
        Vec::new()
    } else {
        drawn.into_iter().map(String::from).collect()
    };
    let last_checkup = now.offset_days(-rng.gen_range(30..=365));
    MedicalHistory::new(policy_id.clone(), conditions, last_checkup, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ScreeningRequirement;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pid() -> PolicyId {
        PolicyId::new("SH-2024-987654")
    }

    proptest! {
        #[test]
        fn status_invariants_hold(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let status = generate_status(&mut rng, &pid(), Timestamp::now());
            prop_assert_eq!(status.is_active, status.status == PolicyState::Active);
            prop_assert!((30..=365).contains(&status.days_remaining));
        }

        #[test]
        fn claims_invariants_hold(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let now = Timestamp::now();
            let claims = generate_claims(&mut rng, &pid(), now);
            prop_assert_eq!(claims.total_benefits, TOTAL_BENEFITS);
            prop_assert!(claims.claims_made_ytd <= MAX_CLAIMS_YTD);
            prop_assert_eq!(
                claims.remaining_balance,
                claims.total_benefits - claims.claims_made_ytd
            );
            prop_assert!(claims.remaining_percentage >= 70.0);
            prop_assert!(claims.remaining_percentage <= 100.0);
            prop_assert!(claims.last_claim_date < now);
        }

        #[test]
        fn premium_invariants_hold(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let now = Timestamp::now();
            let premium = generate_premium(&mut rng, &pid(), now);
            prop_assert!(PREMIUM_TIERS.contains(&premium.annual_premium));
            prop_assert_eq!(
                premium.monthly_premium,
                PremiumInfo::monthly_from_annual(premium.annual_premium)
            );
            prop_assert!((1..=30).contains(&premium.days_until_next_payment));
            prop_assert_eq!(
                premium.next_due_date,
                now.offset_days(i64::from(premium.days_until_next_payment))
            );
            prop_assert!(premium.last_payment_date < now);
        }

        #[test]
        fn coverage_remaining_matches_usage(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let coverage = generate_coverage(&mut rng, &pid(), Timestamp::now());
            prop_assert_eq!(coverage.coverages.len(), 4);
            for line in &coverage.coverages {
                prop_assert!(line.used <= line.limit);
                prop_assert_eq!(line.remaining, line.limit - line.used);
            }
        }

        #[test]
        fn medical_history_invariants_hold(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let history = generate_medical_history(&mut rng, &pid(), Timestamp::now());
            prop_assert!(history.pre_existing_conditions.len() <= 2);
            prop_assert!(!history.pre_existing_conditions.iter().any(|c| c == "None"));
            let any = !history.pre_existing_conditions.is_empty();
            prop_assert_eq!(history.waiting_period_months == 12, any);
            prop_assert_eq!(history.waiting_period_end_date.is_some(), any);
            prop_assert_eq!(
                history.health_screening_required == ScreeningRequirement::Yes,
                history.pre_existing_conditions.len() == 2
            );
        }
    }

    #[test]
    fn status_distribution_produces_non_active_states() {
        let mut rng = StdRng::seed_from_u64(7);
        let inactive = (0..300)
            .map(|_| generate_status(&mut rng, &pid(), Timestamp::now()))
            .filter(|s| !s.is_active)
            .count();
        // Expected about 100 of 300; bounds are loose.
        assert!(inactive > 50 && inactive < 150, "inactive = {inactive}");
    }

    #[test]
    fn beneficiary_shares_sum_to_one_hundred() {
        let info = generate_beneficiaries(&pid(), Timestamp::now());
        assert_eq!(info.beneficiary_count, 3);
        let total: u32 = info
            .beneficiaries
            .iter()
            .map(|b| u32::from(b.percentage))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn provider_echoes_policy_id_for_every_category() {
        let provider = SyntheticProvider::new();
        let id = pid();
        assert_eq!(provider.policy_status(&id).unwrap().policy_id, id);
        assert_eq!(provider.claims_balance(&id).unwrap().policy_id, id);
        assert_eq!(provider.premium_info(&id).unwrap().policy_id, id);
        assert_eq!(provider.coverage_details(&id).unwrap().policy_id, id);
        assert_eq!(provider.beneficiaries(&id).unwrap().policy_id, id);
        assert_eq!(provider.medical_history(&id).unwrap().policy_id, id);
    }
}
