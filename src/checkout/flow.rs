use crate::domain::payment::{AuthorizationResult, VerificationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    ModalOpen { error: Option<String> },
    Processing,
    RedirectedToGateway { authorization_url: String },
    Verifying { reference: String },
    VerifiedSuccess { reference: String },
    VerifiedError { kind: VerificationFailure },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationFailure {
    MissingReference,
    NotSuccessful { reference: String },
    Network { reference: String },
}

impl VerificationFailure {
    pub fn user_message(&self) -> String {
        match self {
            VerificationFailure::MissingReference => "no payment reference found".to_string(),
            VerificationFailure::NotSuccessful { reference } => format!(
                "payment was not successful, please contact support with reference {}",
                reference
            ),
            VerificationFailure::Network { .. } => {
                "could not verify payment, please check your connection and try again".to_string()
            }
        }
    }
}

pub fn begin_checkout() -> CheckoutState {
    CheckoutState::ModalOpen { error: None }
}

pub fn submit(state: CheckoutState, email: &str) -> CheckoutState {
    match state {
        CheckoutState::ModalOpen { .. } => {
            if email.trim().is_empty() {
                CheckoutState::ModalOpen {
                    error: Some("payer email is required".to_string()),
                }
            } else {
                CheckoutState::Processing
            }
        }
        other => other,
    }
}

pub fn authorization_outcome(
    state: CheckoutState,
    outcome: Result<&AuthorizationResult, &str>,
) -> CheckoutState {
    if state != CheckoutState::Processing {
        return state;
    }

    match outcome {
        Ok(auth) if !auth.authorization_url.is_empty() => CheckoutState::RedirectedToGateway {
            authorization_url: auth.authorization_url.clone(),
        },
        Ok(_) => CheckoutState::ModalOpen {
            error: Some("payment could not be started".to_string()),
        },
        Err(message) => CheckoutState::ModalOpen {
            error: Some(message.to_string()),
        },
    }
}

pub fn landed_on_verification(reference: Option<String>, trxref: Option<String>) -> CheckoutState {
    let reference = reference
        .filter(|r| !r.is_empty())
        .or_else(|| trxref.filter(|r| !r.is_empty()));

    match reference {
        Some(reference) => CheckoutState::Verifying { reference },
        None => CheckoutState::VerifiedError {
            kind: VerificationFailure::MissingReference,
        },
    }
}

pub fn verification_outcome(
    state: CheckoutState,
    outcome: Result<&VerificationResult, &str>,
) -> CheckoutState {
    let reference = match state {
        CheckoutState::Verifying { reference } => reference,
        other => return other,
    };

    match outcome {
        Ok(result) if result.is_success() => CheckoutState::VerifiedSuccess { reference },
        Ok(_) => CheckoutState::VerifiedError {
            kind: VerificationFailure::NotSuccessful { reference },
        },
        Err(_) => CheckoutState::VerifiedError {
            kind: VerificationFailure::Network { reference },
        },
    }
}
