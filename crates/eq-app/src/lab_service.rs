//! Ad-hoc evaluations driven directly by lab settings.

use crate::error::{AppError, AppResult};
use eq_salts::find_salt;
use eq_solver::{
    CommonIonPolicy, EquilibriumResult, MassSweep, MassSweepResult, SimulationInput, SweepType,
    evaluate_with_policy, sweep_added_mass,
};
use eq_tutor::{ChatSession, TutorBridge, format_context};

/// Lab settings in the units the simulator is driven in.
#[derive(Debug, Clone, PartialEq)]
pub struct LabRequest {
    /// Catalog id, formula or alias.
    pub salt: String,
    pub volume_l: f64,
    pub added_mass_mg: f64,
    pub common_cation_m: f64,
    pub common_anion_m: f64,
    pub newton: bool,
}

impl LabRequest {
    pub fn input(&self) -> AppResult<SimulationInput> {
        let salt = find_salt(&self.salt)?;
        Ok(SimulationInput::from_lab_units(
            salt,
            self.volume_l,
            self.added_mass_mg,
            self.common_cation_m,
            self.common_anion_m,
        )?)
    }

    pub fn policy(&self) -> CommonIonPolicy {
        if self.newton {
            CommonIonPolicy::newton()
        } else {
            CommonIonPolicy::ZeroCommonIonApproximation
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepRequest {
    pub lab: LabRequest,
    pub from_mg: f64,
    pub to_mg: f64,
    pub points: usize,
    pub logarithmic: bool,
}

pub fn evaluate_request(req: &LabRequest) -> AppResult<(SimulationInput, EquilibriumResult)> {
    let input = req.input()?;
    let result = evaluate_with_policy(&input, &req.policy())?;
    Ok((input, result))
}

pub fn sweep_request(req: &SweepRequest) -> AppResult<MassSweepResult> {
    let sweep_type = if req.logarithmic {
        SweepType::Logarithmic
    } else {
        SweepType::Linear
    };
    let sweep = MassSweep::new(req.from_mg, req.to_mg, req.points, sweep_type)?;
    tracing::info!(%sweep, salt = %req.lab.salt, "running sweep");

    let input = req.lab.input()?;
    Ok(sweep_added_mass(&input, &sweep, &req.lab.policy())?)
}

/// Ask one question about the current lab state in a fresh session.
pub fn ask_tutor(
    input: &SimulationInput,
    result: &EquilibriumResult,
    question: &str,
    bridge: &dyn TutorBridge,
) -> AppResult<ChatSession> {
    if question.trim().is_empty() {
        return Err(AppError::InvalidInput("question must not be empty".to_string()));
    }

    let context = format_context(input, result);
    let mut session = ChatSession::new();
    session.ask(question, &context, bridge);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eq_tutor::{ChatRole, DisabledTutor, TutorError, TutorResult};

    struct Offline;

    impl TutorBridge for Offline {
        fn respond(&self, _question: &str, _context: &str) -> TutorResult<String> {
            Err(TutorError::Bridge {
                message: "connection refused".to_string(),
            })
        }
    }

    fn agcl(mass_mg: f64) -> LabRequest {
        LabRequest {
            salt: "agcl".to_string(),
            volume_l: 1.0,
            added_mass_mg: mass_mg,
            common_cation_m: 0.0,
            common_anion_m: 0.0,
            newton: false,
        }
    }

    #[test]
    fn evaluates_catalog_salt() {
        let (input, result) = evaluate_request(&agcl(10.0)).unwrap();
        assert_eq!(input.salt().formula, "AgCl");
        assert!(result.is_saturated);
    }

    #[test]
    fn unknown_salt_is_salt_error() {
        let mut req = agcl(1.0);
        req.salt = "NaCl".to_string();
        assert!(matches!(evaluate_request(&req), Err(AppError::Salt(_))));
    }

    #[test]
    fn bad_volume_is_solver_error() {
        let mut req = agcl(1.0);
        req.volume_l = 0.0;
        assert!(matches!(evaluate_request(&req), Err(AppError::Solver(_))));
    }

    #[test]
    fn newton_flag_selects_policy() {
        let mut req = agcl(1.0);
        assert_eq!(req.policy(), CommonIonPolicy::ZeroCommonIonApproximation);
        req.newton = true;
        assert!(matches!(req.policy(), CommonIonPolicy::Newton(_)));
    }

    #[test]
    fn sweep_runs_through_catalog() {
        let req = SweepRequest {
            lab: agcl(0.0),
            from_mg: 0.0,
            to_mg: 10.0,
            points: 11,
            logarithmic: false,
        };
        let result = sweep_request(&req).unwrap();
        assert_eq!(result.points.len(), 11);
        assert!(result.saturation_onset_mg.is_some());
    }

    #[test]
    fn invalid_sweep_rejected() {
        let req = SweepRequest {
            lab: agcl(0.0),
            from_mg: 0.0,
            to_mg: 10.0,
            points: 11,
            logarithmic: true,
        };
        assert!(matches!(sweep_request(&req), Err(AppError::Solver(_))));
    }

    #[test]
    fn tutor_session_records_exchange() {
        let (input, result) = evaluate_request(&agcl(10.0)).unwrap();
        let session = ask_tutor(&input, &result, "Why is it cloudy?", &DisabledTutor).unwrap();
        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, ChatRole::User);
        assert_eq!(history[2].text, DisabledTutor::REPLY);

        assert!(ask_tutor(&input, &result, "   ", &DisabledTutor).is_err());
    }

    #[test]
    fn bridge_failure_becomes_apology_not_error() {
        let (input, result) = evaluate_request(&agcl(10.0)).unwrap();
        let session = ask_tutor(&input, &result, "What is Qsp?", &Offline).unwrap();
        let reply = session.history().last().unwrap();
        assert_eq!(reply.role, ChatRole::Model);
        assert_eq!(reply.text, ChatSession::BRIDGE_FAILURE_REPLY);
    }
}
