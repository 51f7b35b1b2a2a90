//! # Donation Commands
//!
//! The donate page: program selector, preset amounts, submit.

use serde::Serialize;
use tihar_core::{DonationForm, DonationProgram, Money, ProgramInfo, DONATION_PRESETS};
use tracing::debug;

use crate::error::ApiError;
use crate::flows::{self, DonationReceipt};
use crate::state::AppState;

/// What the donate page needs to render its form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationOptions {
    pub programs: Vec<ProgramInfo>,
    pub presets: Vec<Money>,
    pub minimum: Money,
}

/// Lists the programs, preset amounts, and the minimum donation.
pub fn list_programs(state: &AppState) -> DonationOptions {
    DonationOptions {
        programs: DonationProgram::ALL.into_iter().map(ProgramInfo::from).collect(),
        presets: DONATION_PRESETS.to_vec(),
        minimum: state.config.min_donation(),
    }
}

/// Submits a donation.
///
/// ## Arguments
/// * `program` - Program id, e.g. `"post-release"`
/// * `amount` - Amount field text, whole rupees
///
/// ## Returns
/// The thank-you receipt. It clears itself after `resetInSecs` unless the
/// donor leaves the page first.
pub fn submit_donation(
    state: &AppState,
    program: &str,
    amount: &str,
) -> Result<DonationReceipt, ApiError> {
    debug!(program = %program, amount = %amount, "submit_donation command");

    let program: DonationProgram = program.parse()?;
    let form = DonationForm::new(program, amount);
    Ok(flows::submit_donation(state, &form)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::Route;

    #[test]
    fn test_list_programs() {
        let state = AppState::default();
        let options = list_programs(&state);

        assert_eq!(options.programs.len(), 5);
        assert_eq!(options.programs[4].id, "post-release");
        assert_eq!(options.presets[0], Money::from_rupees(500));
        assert_eq!(options.minimum, Money::from_rupees(100));
    }

    #[tokio::test]
    async fn test_submit_donation() {
        let state = AppState::default();
        let receipt = submit_donation(&state, "behavioral", "2500").unwrap();

        assert_eq!(receipt.program, DonationProgram::Behavioral);
        assert_eq!(receipt.amount, Money::from_rupees(2500));
        assert_eq!(state.nav.with_nav(|n| n.route()), Route::Donate);
    }

    #[tokio::test]
    async fn test_submit_donation_errors() {
        let state = AppState::default();

        let err = submit_donation(&state, "lottery", "500").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = submit_donation(&state, "general", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("required"));

        let err = submit_donation(&state, "general", "50").unwrap_err();
        assert!(err.message.contains("at least 100"));
    }
}
