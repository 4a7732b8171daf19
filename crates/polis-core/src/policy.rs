//! # Policy Payloads
//!
//! Typed payloads for the six policy-information categories, plus the
//! composite [`CompletePolicyInfo`]. Field names are the JSON wire names.
//!
//! Every payload echoes the [`PolicyId`] it was produced for. Payloads are
//! built fresh per request and never stored.

use serde::{Deserialize, Serialize};

use crate::identity::PolicyId;
use crate::temporal::Timestamp;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The six categories of policy information served by the API.
///
/// `as_str` yields the key used for the category in a [`CompletePolicyInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCategory {
    /// Lifecycle status of the policy.
    Status,
    /// Claims made against the benefit pool.
    Claims,
    /// Premium amounts and payment schedule.
    Premium,
    /// Per-coverage limits and usage.
    Coverage,
    /// Named beneficiaries and their shares.
    Beneficiaries,
    /// Pre-existing conditions and waiting periods.
    MedicalHistory,
}

impl PolicyCategory {
    /// All categories, in composite-response order.
    pub const ALL: [PolicyCategory; 6] = [
        Self::Status,
        Self::Claims,
        Self::Premium,
        Self::Coverage,
        Self::Beneficiaries,
        Self::MedicalHistory,
    ];

    /// Key of this category in the composite response.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Claims => "claims",
            Self::Premium => "premium",
            Self::Coverage => "coverage",
            Self::Beneficiaries => "beneficiaries",
            Self::MedicalHistory => "medical_history",
        }
    }
}

impl std::fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyState {
    /// In force.
    Active,
    /// Issued but not yet in force.
    Pending,
    /// Temporarily not in force (e.g. unpaid premium).
    Suspended,
    /// Past its end date.
    Expired,
}

impl PolicyState {
    /// Whether the policy is in force.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Real-time policy status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyStatus {
    /// Policy this status belongs to.
    pub policy_id: PolicyId,
    /// Current lifecycle state.
    pub status: PolicyState,
    /// Days until the current term ends.
    pub days_remaining: u32,
    /// When the status was read.
    pub last_updated: Timestamp,
    /// Always equal to `status == Active`.
    pub is_active: bool,
}

impl PolicyStatus {
    /// Build a status payload; `is_active` is derived from `status`.
    pub fn new(
        policy_id: PolicyId,
        status: PolicyState,
        days_remaining: u32,
        last_updated: Timestamp,
    ) -> Self {
        Self {
            policy_id,
            is_active: status.is_active(),
            status,
            days_remaining,
            last_updated,
        }
    }
}

// ---------------------------------------------------------------------------
// Claims
// ---------------------------------------------------------------------------

/// Claims balance against the policy's total benefit pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimsBalance {
    /// Policy this balance belongs to.
    pub policy_id: PolicyId,
    /// Total benefits available for the policy year.
    pub total_benefits: u64,
    /// Amount claimed year-to-date.
    pub claims_made_ytd: u64,
    /// `total_benefits - claims_made_ytd`.
    pub remaining_balance: u64,
    /// Remaining balance as a percentage of total benefits, two decimals.
    pub remaining_percentage: f64,
    /// Date of the most recent claim.
    pub last_claim_date: Timestamp,
    /// When the balance was read.
    pub timestamp: Timestamp,
}

impl ClaimsBalance {
    /// Build a claims payload; the balance and percentage are derived.
    ///
    /// `claims_made_ytd` is clamped to `total_benefits`.
    pub fn new(
        policy_id: PolicyId,
        total_benefits: u64,
        claims_made_ytd: u64,
        last_claim_date: Timestamp,
        timestamp: Timestamp,
    ) -> Self {
        let claims_made_ytd = claims_made_ytd.min(total_benefits);
        let remaining_balance = total_benefits - claims_made_ytd;
        let remaining_percentage = if total_benefits == 0 {
            0.0
        } else {
            round2(remaining_balance as f64 / total_benefits as f64 * 100.0)
        };
        Self {
            policy_id,
            total_benefits,
            claims_made_ytd,
            remaining_balance,
            remaining_percentage,
            last_claim_date,
            timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// Premium
// ---------------------------------------------------------------------------

/// Whether the current premium installment has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Installment received.
    Paid,
    /// Installment outstanding.
    Pending,
}

/// How premiums are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card on file.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Direct debit or wire.
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    /// Paper check.
    Check,
}

/// Premium payment information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumInfo {
    /// Policy this premium belongs to.
    pub policy_id: PolicyId,
    /// Annual premium amount.
    pub annual_premium: u64,
    /// `annual_premium / 12`, two decimals.
    pub monthly_premium: f64,
    /// Status of the current installment.
    pub payment_status: PaymentStatus,
    /// Days until the next installment is due.
    pub days_until_next_payment: u32,
    /// Due date of the next installment.
    pub next_due_date: Timestamp,
    /// Date of the last installment received.
    pub last_payment_date: Timestamp,
    /// Payment method on file.
    pub payment_method: PaymentMethod,
    /// When the premium information was read.
    pub timestamp: Timestamp,
}

impl PremiumInfo {
    /// Monthly installment for an annual premium, rounded to cents.
    pub fn monthly_from_annual(annual_premium: u64) -> f64 {
        round2(annual_premium as f64 / 12.0)
    }
}

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

/// Usage of a single coverage type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageLine {
    /// Coverage type, e.g. `Medical Coverage`.
    #[serde(rename = "type")]
    pub coverage_type: String,
    /// Coverage limit.
    pub limit: u64,
    /// Amount used.
    pub used: u64,
    /// `limit - used`.
    pub remaining: u64,
    /// Coverage status.
    pub status: PolicyState,
}

impl CoverageLine {
    /// Build an active coverage line; `used` is clamped to `limit`.
    pub fn active(coverage_type: impl Into<String>, limit: u64, used: u64) -> Self {
        let used = used.min(limit);
        Self {
            coverage_type: coverage_type.into(),
            limit,
            used,
            remaining: limit - used,
            status: PolicyState::Active,
        }
    }
}

/// Per-coverage-type limits and usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageDetails {
    /// Policy the coverages belong to.
    pub policy_id: PolicyId,
    /// One entry per coverage type.
    pub coverages: Vec<CoverageLine>,
    /// When the coverage details were read.
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// Beneficiaries
// ---------------------------------------------------------------------------

/// A named beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Full name.
    pub name: String,
    /// Relationship to the policy holder.
    pub relationship: String,
    /// Share of the benefit, in percent.
    pub percentage: u8,
    /// Contact address.
    pub contact: String,
}

/// Beneficiaries registered on a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryInfo {
    /// Policy the beneficiaries belong to.
    pub policy_id: PolicyId,
    /// Always equal to `beneficiaries.len()`.
    pub beneficiary_count: usize,
    /// Registered beneficiaries.
    pub beneficiaries: Vec<Beneficiary>,
    /// When the beneficiaries were read.
    pub timestamp: Timestamp,
}

impl BeneficiaryInfo {
    /// Build a beneficiary payload; the count is derived.
    pub fn new(policy_id: PolicyId, beneficiaries: Vec<Beneficiary>, timestamp: Timestamp) -> Self {
        Self {
            policy_id,
            beneficiary_count: beneficiaries.len(),
            beneficiaries,
            timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// Medical history
// ---------------------------------------------------------------------------

/// Whether a health screening is required before coverage applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreeningRequirement {
    /// Screening required.
    Yes,
    /// No screening required.
    No,
}

/// Medical history summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    /// Policy the history belongs to.
    pub policy_id: PolicyId,
    /// Declared pre-existing conditions; empty when none.
    pub pre_existing_conditions: Vec<String>,
    /// 12 when any condition is declared, otherwise 0.
    pub waiting_period_months: u32,
    /// End of the waiting period; `null` when there is none.
    pub waiting_period_end_date: Option<Timestamp>,
    /// Screening requirement.
    pub health_screening_required: ScreeningRequirement,
    /// Date of the last health check-up.
    pub last_health_checkup: Timestamp,
    /// When the history was read.
    pub timestamp: Timestamp,
}

impl MedicalHistory {
    /// Waiting period applied when any pre-existing condition is declared.
    pub const WAITING_PERIOD_MONTHS: u32 = 12;

    /// Length of the waiting period in days.
    pub const WAITING_PERIOD_DAYS: i64 = 365;

    /// Build a medical history payload from declared conditions.
    ///
    /// The waiting period and screening requirement are derived: any condition
    /// triggers a twelve-month waiting period ending `WAITING_PERIOD_DAYS`
    /// after `now`; more than one condition requires screening.
    pub fn new(
        policy_id: PolicyId,
        pre_existing_conditions: Vec<String>,
        last_health_checkup: Timestamp,
        now: Timestamp,
    ) -> Self {
        let has_conditions = !pre_existing_conditions.is_empty();
        let health_screening_required = if pre_existing_conditions.len() > 1 {
            ScreeningRequirement::Yes
        } else {
            ScreeningRequirement::No
        };
        Self {
            policy_id,
            waiting_period_months: if has_conditions {
                Self::WAITING_PERIOD_MONTHS
            } else {
                0
            },
            waiting_period_end_date: has_conditions
                .then(|| now.offset_days(Self::WAITING_PERIOD_DAYS)),
            pre_existing_conditions,
            health_screening_required,
            last_health_checkup,
            timestamp: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Composite
// ---------------------------------------------------------------------------

/// All six categories for one policy, keyed by category name.
///
/// Field order matches the composite JSON: `policy_id` first, then the
/// categories in [`PolicyCategory::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletePolicyInfo {
    /// Echoed policy identifier.
    pub policy_id: PolicyId,
    /// See [`PolicyStatus`].
    pub status: PolicyStatus,
    /// See [`ClaimsBalance`].
    pub claims: ClaimsBalance,
    /// See [`PremiumInfo`].
    pub premium: PremiumInfo,
    /// See [`CoverageDetails`].
    pub coverage: CoverageDetails,
    /// See [`BeneficiaryInfo`].
    pub beneficiaries: BeneficiaryInfo,
    /// See [`MedicalHistory`].
    pub medical_history: MedicalHistory,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
