// ============================================================================
// REDEMPTION MODELS - Outcome contract and verifier state machine
// ============================================================================
//
// The remote `consume_redemption` procedure owns all business rules
// (expiry, per-user and per-merchant monthly caps, idempotency). This
// module only models its observed result shape and the page-level flow
// around one invocation.

use serde::Deserialize;

/// Denial reasons reported by the remote procedure. Unrecognized codes
/// are carried verbatim and render as a generic denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    NotFound,
    Expired,
    AlreadyRedeemed,
    LimitMonthlyReached,
    LimitMerchantMonthlyReached,
    ServerError,
    Other(String),
}

impl DenyReason {
    pub fn from_code(code: &str) -> Self {
        match code {
            "not_found" => DenyReason::NotFound,
            "expired" => DenyReason::Expired,
            "already_redeemed" => DenyReason::AlreadyRedeemed,
            "limit_monthly_reached" => DenyReason::LimitMonthlyReached,
            "limit_merchant_monthly_reached" => DenyReason::LimitMerchantMonthlyReached,
            "server_error" => DenyReason::ServerError,
            other => DenyReason::Other(other.to_string()),
        }
    }

    /// Text shown to the staff member on the verify page.
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::NotFound => "Invalid code.",
            DenyReason::Expired => "This QR code expired.",
            DenyReason::AlreadyRedeemed => "Already redeemed.",
            DenyReason::LimitMonthlyReached => "Monthly limit reached for this user.",
            DenyReason::LimitMerchantMonthlyReached => {
                "Monthly limit reached for this restaurant (3)."
            }
            DenyReason::ServerError => "Server error. Try again.",
            DenyReason::Other(_) => "Denied.",
        }
    }
}

/// Discriminated result of one `consume_redemption` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "OutcomeWire")]
pub enum RedeemOutcome {
    Approved,
    Denied(DenyReason),
}

/// Wire shape: `{"ok":true}` or `{"ok":false,"reason":...}`.
#[derive(Debug, Deserialize)]
struct OutcomeWire {
    ok: bool,
    reason: Option<String>,
}

impl From<OutcomeWire> for RedeemOutcome {
    fn from(wire: OutcomeWire) -> Self {
        if wire.ok {
            RedeemOutcome::Approved
        } else {
            let code = wire.reason.unwrap_or_default();
            RedeemOutcome::Denied(DenyReason::from_code(&code))
        }
    }
}

/// Page-level phases of one verification. Once a redeem attempt starts it
/// always reaches a terminal phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyPhase {
    Idle,
    InFlight,
    Approved,
    Denied(DenyReason),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("redeem requires a token")]
    EmptyToken,
    #[error("a redemption attempt is already in flight")]
    AlreadyInFlight,
}

/// Verification flow for a single token, scoped to one request.
///
/// Re-triggering after a terminal phase is allowed; the remote procedure
/// stays authoritative for per-token idempotency.
#[derive(Debug, Clone)]
pub struct VerifyFlow {
    token: String,
    phase: VerifyPhase,
}

impl VerifyFlow {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            phase: VerifyPhase::Idle,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn phase(&self) -> &VerifyPhase {
        &self.phase
    }

    /// Whether the redeem control is actionable right now.
    pub fn can_redeem(&self) -> bool {
        !self.token.is_empty() && self.phase != VerifyPhase::InFlight
    }

    /// Start a redeem attempt.
    pub fn begin(&mut self) -> Result<(), FlowError> {
        if self.token.is_empty() {
            return Err(FlowError::EmptyToken);
        }
        if self.phase == VerifyPhase::InFlight {
            return Err(FlowError::AlreadyInFlight);
        }
        self.phase = VerifyPhase::InFlight;
        Ok(())
    }

    /// Settle the in-flight attempt with the remote procedure's outcome.
    pub fn resolve(&mut self, outcome: RedeemOutcome) {
        self.phase = match outcome {
            RedeemOutcome::Approved => VerifyPhase::Approved,
            RedeemOutcome::Denied(reason) => VerifyPhase::Denied(reason),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_messages_match_the_fixed_table() {
        let cases = [
            ("not_found", "Invalid code."),
            ("expired", "This QR code expired."),
            ("already_redeemed", "Already redeemed."),
            ("limit_monthly_reached", "Monthly limit reached for this user."),
            (
                "limit_merchant_monthly_reached",
                "Monthly limit reached for this restaurant (3).",
            ),
            ("server_error", "Server error. Try again."),
        ];
        for (code, text) in cases {
            assert_eq!(DenyReason::from_code(code).message(), text, "code {code}");
        }
    }

    #[test]
    fn unknown_reason_renders_generic_denial() {
        assert_eq!(DenyReason::from_code("out_of_scope").message(), "Denied.");
        assert_eq!(DenyReason::from_code("").message(), "Denied.");
    }

    #[test]
    fn outcome_deserializes_from_the_wire_shape() {
        let approved: RedeemOutcome = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(approved, RedeemOutcome::Approved);

        let denied: RedeemOutcome =
            serde_json::from_str(r#"{"ok":false,"reason":"expired"}"#).unwrap();
        assert_eq!(denied, RedeemOutcome::Denied(DenyReason::Expired));

        // A denial without a reason still settles, as a generic one.
        let bare: RedeemOutcome = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert_eq!(bare, RedeemOutcome::Denied(DenyReason::Other(String::new())));
    }

    #[test]
    fn empty_token_cannot_start_a_redeem() {
        let mut flow = VerifyFlow::new("");
        assert!(!flow.can_redeem());
        assert_eq!(flow.begin(), Err(FlowError::EmptyToken));
        assert_eq!(*flow.phase(), VerifyPhase::Idle);
    }

    #[test]
    fn at_most_one_attempt_in_flight() {
        let mut flow = VerifyFlow::new("abc123");
        flow.begin().unwrap();
        assert_eq!(flow.begin(), Err(FlowError::AlreadyInFlight));
        assert!(!flow.can_redeem());
    }

    #[test]
    fn triggered_flow_reaches_a_terminal_phase() {
        let mut flow = VerifyFlow::new("abc123");
        flow.begin().unwrap();
        flow.resolve(RedeemOutcome::Denied(DenyReason::Expired));
        assert_eq!(*flow.phase(), VerifyPhase::Denied(DenyReason::Expired));

        // Approval always wins over any prior state.
        flow.begin().unwrap();
        flow.resolve(RedeemOutcome::Approved);
        assert_eq!(*flow.phase(), VerifyPhase::Approved);
    }

    #[test]
    fn retrigger_after_terminal_result_is_allowed() {
        let mut flow = VerifyFlow::new("abc123");
        flow.begin().unwrap();
        flow.resolve(RedeemOutcome::Approved);
        assert!(flow.can_redeem());
        assert!(flow.begin().is_ok());
    }
}
