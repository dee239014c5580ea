// ============================================================================
// QUOTE FORM STATE - Estado ocupado/libre del formulario de presupuesto
// ============================================================================
// El envío real lo hace el navegador contra el endpoint externo; aquí sólo se
// gestiona el botón. Cada envío arma un temporizador identificado por un
// ticket: sólo el ticket vigente puede devolver el formulario a Idle.
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Identifica un temporizador de auto-reversión
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct QuoteFormState {
    phase: SubmitPhase,
    generation: u64,
}

impl QuoteFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Idle -> Submitting. `None` si ya se estaba enviando.
    pub fn submit(&mut self) -> Option<SubmitTicket> {
        if self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        self.generation += 1;
        Some(SubmitTicket(self.generation))
    }

    /// Venció el temporizador: vuelve a Idle sólo si el ticket sigue vigente
    pub fn timeout_elapsed(&mut self, ticket: SubmitTicket) -> bool {
        if self.is_submitting() && ticket.0 == self.generation {
            self.phase = SubmitPhase::Idle;
            true
        } else {
            false
        }
    }

    /// El usuario editó un campo: vuelve a Idle e invalida el temporizador
    pub fn field_edited(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        self.generation += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_enters_busy_state_immediately() {
        let mut form = QuoteFormState::new();
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(form.submit().is_some());
        assert!(form.is_submitting());
    }

    #[test]
    fn timeout_reverts_to_idle() {
        let mut form = QuoteFormState::new();
        let ticket = form.submit().expect("ticket");
        assert!(form.timeout_elapsed(ticket));
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut form = QuoteFormState::new();
        let ticket = form.submit().expect("ticket");
        assert!(form.submit().is_none());
        assert!(form.timeout_elapsed(ticket));
    }

    #[test]
    fn edit_reverts_and_invalidates_timer() {
        let mut form = QuoteFormState::new();
        let stale = form.submit().expect("ticket");
        assert!(form.field_edited());
        assert!(!form.is_submitting());

        let current = form.submit().expect("second ticket");
        assert!(!form.timeout_elapsed(stale));
        assert!(form.is_submitting());
        assert!(form.timeout_elapsed(current));
    }

    #[test]
    fn edit_while_idle_is_noop() {
        let mut form = QuoteFormState::new();
        assert!(!form.field_edited());
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }
}
