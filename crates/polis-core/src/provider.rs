//! # Policy Data Provider
//!
//! The seam between the HTTP layer and wherever policy data comes from.
//! Handlers hold an `Arc<dyn PolicyDataProvider>` and never know which
//! implementation is behind it.

use crate::error::ProviderError;
use crate::identity::PolicyId;
use crate::policy::{
    BeneficiaryInfo, ClaimsBalance, CompletePolicyInfo, CoverageDetails, MedicalHistory,
    PolicyStatus, PremiumInfo,
};

/// Source of policy-category payloads for a policy identifier.
///
/// Implementations must be stateless with respect to callers: the API serves
/// requests concurrently and shares one provider instance across all of them.
pub trait PolicyDataProvider: Send + Sync {
    /// Current lifecycle status.
    fn policy_status(&self, policy_id: &PolicyId) -> Result<PolicyStatus, ProviderError>;

    /// Claims balance against the benefit pool.
    fn claims_balance(&self, policy_id: &PolicyId) -> Result<ClaimsBalance, ProviderError>;

    /// Premium amounts and payment schedule.
    fn premium_info(&self, policy_id: &PolicyId) -> Result<PremiumInfo, ProviderError>;

    /// Per-coverage limits and usage.
    fn coverage_details(&self, policy_id: &PolicyId) -> Result<CoverageDetails, ProviderError>;

    /// Registered beneficiaries.
    fn beneficiaries(&self, policy_id: &PolicyId) -> Result<BeneficiaryInfo, ProviderError>;

    /// Medical history summary.
    fn medical_history(&self, policy_id: &PolicyId) -> Result<MedicalHistory, ProviderError>;

    /// All six categories for one policy.
    ///
    /// All-or-nothing: the first failing category aborts the whole lookup and
    /// no partial result is returned.
    fn complete_info(&self, policy_id: &PolicyId) -> Result<CompletePolicyInfo, ProviderError> {
        Ok(CompletePolicyInfo {
            policy_id: policy_id.clone(),
            status: self.policy_status(policy_id)?,
            claims: self.claims_balance(policy_id)?,
            premium: self.premium_info(policy_id)?,
            coverage: self.coverage_details(policy_id)?,
            beneficiaries: self.beneficiaries(policy_id)?,
            medical_history: self.medical_history(policy_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::policy::PolicyCategory;
    use crate::synthetic::SyntheticProvider;

    /// Delegates to the synthetic provider but fails one category.
    struct FailsOn {
        category: PolicyCategory,
        inner: SyntheticProvider,
        calls: AtomicUsize,
    }

    impl FailsOn {
        fn new(category: PolicyCategory) -> Self {
            Self {
                category,
                inner: SyntheticProvider::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn check(&self, category: PolicyCategory, id: &PolicyId) -> Result<(), ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if category == self.category {
                Err(ProviderError::Generation {
                    category,
                    policy_id: id.to_string(),
                    reason: "injected".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl PolicyDataProvider for FailsOn {
        fn policy_status(&self, id: &PolicyId) -> Result<PolicyStatus, ProviderError> {
            self.check(PolicyCategory::Status, id)?;
            self.inner.policy_status(id)
        }
        fn claims_balance(&self, id: &PolicyId) -> Result<ClaimsBalance, ProviderError> {
            self.check(PolicyCategory::Claims, id)?;
            self.inner.claims_balance(id)
        }
        fn premium_info(&self, id: &PolicyId) -> Result<PremiumInfo, ProviderError> {
            self.check(PolicyCategory::Premium, id)?;
            self.inner.premium_info(id)
        }
        fn coverage_details(&self, id: &PolicyId) -> Result<CoverageDetails, ProviderError> {
            self.check(PolicyCategory::Coverage, id)?;
            self.inner.coverage_details(id)
        }
        fn beneficiaries(&self, id: &PolicyId) -> Result<BeneficiaryInfo, ProviderError> {
            self.check(PolicyCategory::Beneficiaries, id)?;
            self.inner.beneficiaries(id)
        }
        fn medical_history(&self, id: &PolicyId) -> Result<MedicalHistory, ProviderError> {
            self.check(PolicyCategory::MedicalHistory, id)?;
            self.inner.medical_history(id)
        }
    }

    #[test]
    fn complete_info_echoes_policy_id_everywhere() {
        let id = PolicyId::new("SH-2024-987654");
        let info = SyntheticProvider::new().complete_info(&id).unwrap();
        assert_eq!(info.policy_id, id);
        assert_eq!(info.status.policy_id, id);
        assert_eq!(info.claims.policy_id, id);
        assert_eq!(info.premium.policy_id, id);
        assert_eq!(info.coverage.policy_id, id);
        assert_eq!(info.beneficiaries.policy_id, id);
        assert_eq!(info.medical_history.policy_id, id);
    }

    #[test]
    fn complete_info_fails_if_any_category_fails() {
        let id = PolicyId::new("SH-1");
        for category in PolicyCategory::ALL {
            let provider = FailsOn::new(category);
            let err = provider.complete_info(&id).unwrap_err();
            assert!(
                matches!(err, ProviderError::Generation { category: c, .. } if c == category)
            );
        }
    }

    #[test]
    fn complete_info_stops_at_first_failure() {
        let provider = FailsOn::new(PolicyCategory::Claims);
        let _ = provider.complete_info(&PolicyId::new("SH-1"));
        // status succeeded, claims failed, nothing after it was attempted.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn composite_serializes_with_expected_keys() {
        let info = SyntheticProvider::new()
            .complete_info(&PolicyId::new("SH-1"))
            .unwrap();
        let value = serde_json::to_value(&info).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "beneficiaries",
                "claims",
                "coverage",
                "medical_history",
                "policy_id",
                "premium",
                "status"
            ]
        );
    }
}
