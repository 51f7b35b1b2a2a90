//! # Donations
//!
//! Programs a donor can support and the rules for a donation form.
//!
//! ## Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Program:  [ General Rehabilitation Fund      ▼ ]                       │
//! │  Amount:   [ 1000 ]   [₹500] [₹1000] [₹5000] [₹10000]                   │
//! │                                                                         │
//! │  [ Donate Now ] ──► DonationForm::validate() ← THIS MODULE              │
//! │                          │                                              │
//! │                          ├── empty?        → "amount is required"       │
//! │                          ├── not a number? → invalid format             │
//! │                          ├── below ₹100?   → below minimum              │
//! │                          └── OK → Donation { program, amount }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_donation_amount, ValidationResult};

/// A rehabilitation program that accepts donations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum DonationProgram {
    #[default]
    General,
    Skill,
    Behavioral,
    Education,
    PostRelease,
}

impl DonationProgram {
    /// All programs, in the order the selector lists them.
    pub const ALL: [DonationProgram; 5] = [
        DonationProgram::General,
        DonationProgram::Skill,
        DonationProgram::Behavioral,
        DonationProgram::Education,
        DonationProgram::PostRelease,
    ];

    /// Stable id used by the form ("post-release").
    pub const fn id(&self) -> &'static str {
        match self {
            DonationProgram::General => "general",
            DonationProgram::Skill => "skill",
            DonationProgram::Behavioral => "behavioral",
            DonationProgram::Education => "education",
            DonationProgram::PostRelease => "post-release",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            DonationProgram::General => "General Rehabilitation Fund",
            DonationProgram::Skill => "Skill Training Programs",
            DonationProgram::Behavioral => "Behavioral Correction",
            DonationProgram::Education => "Educational Programs",
            DonationProgram::PostRelease => "Post-Release Support",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            DonationProgram::General => {
                "Support overall rehabilitation efforts including skill training and welfare programs"
            }
            DonationProgram::Skill => {
                "Fund vocational training in carpentry, tailoring, food processing, and more"
            }
            DonationProgram::Behavioral => {
                "Support counseling, therapy, and behavioral correction initiatives"
            }
            DonationProgram::Education => {
                "Provide educational resources and literacy programs for inmates"
            }
            DonationProgram::PostRelease => {
                "Help with job placement and reintegration after release"
            }
        }
    }
}

impl fmt::Display for DonationProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DonationProgram {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        DonationProgram::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "program".to_string(),
                allowed: DonationProgram::ALL.iter().map(|p| p.id().to_string()).collect(),
            })
    }
}

/// Program summary for the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgramInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<DonationProgram> for ProgramInfo {
    fn from(program: DonationProgram) -> Self {
        ProgramInfo {
            id: program.id().to_string(),
            name: program.name().to_string(),
            description: program.description().to_string(),
        }
    }
}

/// The raw donation form as typed by the donor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    pub program: DonationProgram,
    /// Text of the amount field; may be empty or garbage.
    pub amount: String,
}

impl DonationForm {
    pub fn new(program: DonationProgram, amount: impl Into<String>) -> Self {
        DonationForm {
            program,
            amount: amount.into(),
        }
    }

    /// Fills the amount field from one of the preset buttons.
    pub fn choose_preset(&mut self, amount: Money) {
        self.amount = amount.rupees().to_string();
    }

    /// Checks the form against a minimum amount.
    ///
    /// ```rust
    /// use tihar_core::{DonationForm, DonationProgram, MIN_DONATION};
    ///
    /// let ok = DonationForm::new(DonationProgram::Skill, "1000").validate(MIN_DONATION);
    /// assert_eq!(ok.unwrap().amount.rupees(), 1000);
    ///
    /// let too_small = DonationForm::new(DonationProgram::Skill, "50").validate(MIN_DONATION);
    /// assert!(too_small.is_err());
    /// ```
    pub fn validate(&self, minimum: Money) -> ValidationResult<Donation> {
        let amount = validate_donation_amount(&self.amount, minimum)?;
        Ok(Donation {
            program: self.program,
            amount,
        })
    }
}

/// A donation that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Donation {
    pub program: DonationProgram,
    pub amount: Money,
}
