// ============================================================================
// ACCORDION STATE - FAQ con un único panel abierto
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionPanel {
    /// id del botón que controla el panel
    pub id: String,
    /// id de la región de contenido (`aria-controls`)
    pub content_id: String,
    pub state: PanelState,
}

impl AccordionPanel {
    pub fn is_expanded(&self) -> bool {
        self.state == PanelState::Expanded
    }

    /// Valor de `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_expanded() { "true" } else { "false" }
    }

    /// Glifo del indicador: `+` cerrado, `−` abierto
    pub fn icon(&self) -> &'static str {
        if self.is_expanded() { "−" } else { "+" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionState {
    prefix: String,
    panels: Vec<AccordionPanel>,
}

impl AccordionState {
    /// `count` paneles, todos cerrados
    pub fn new(prefix: &str, count: usize) -> Self {
        let mut state = Self {
            prefix: prefix.to_string(),
            panels: Vec::new(),
        };
        state.reset(count);
        state
    }

    /// Reconstruir paneles (p.ej. tras cambiar de idioma), todos cerrados
    pub fn reset(&mut self, count: usize) {
        self.panels = (0..count)
            .map(|index| AccordionPanel {
                id: format!("{}-question-{}", self.prefix, index),
                content_id: format!("{}-answer-{}", self.prefix, index),
                state: PanelState::Collapsed,
            })
            .collect();
    }

    pub fn panels(&self) -> &[AccordionPanel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&AccordionPanel> {
        self.panels.get(index)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.panels.iter().position(AccordionPanel::is_expanded)
    }

    pub fn index_of(&self, panel_id: &str) -> Option<usize> {
        self.panels.iter().position(|panel| panel.id == panel_id)
    }

    /// Abrir/cerrar un panel; abrir uno cierra los demás en la misma operación.
    /// Índices fuera de rango no cambian nada (devuelve `false`).
    pub fn toggle(&mut self, index: usize) -> bool {
        let was_expanded = match self.panels.get(index) {
            Some(panel) => panel.is_expanded(),
            None => return false,
        };
        for panel in self.panels.iter_mut() {
            panel.state = PanelState::Collapsed;
        }
        if !was_expanded {
            self.panels[index].state = PanelState::Expanded;
        }
        true
    }

    pub fn toggle_by_id(&mut self, panel_id: &str) -> bool {
        match self.index_of(panel_id) {
            Some(index) => self.toggle(index),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(state: &AccordionState) -> Vec<usize> {
        state
            .panels()
            .iter()
            .enumerate()
            .filter(|(_, panel)| panel.is_expanded())
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn starts_all_collapsed() {
        let state = AccordionState::new("faq", 6);
        assert_eq!(state.len(), 6);
        assert!(expanded(&state).is_empty());
        assert!(state.panels().iter().all(|p| p.icon() == "+" && p.aria_expanded() == "false"));
    }

    #[test]
    fn expanding_b_collapses_a() {
        let mut state = AccordionState::new("faq", 3);
        state.toggle(0);
        state.toggle(1);
        assert_eq!(expanded(&state), vec![1]);
        assert_eq!(state.panel(0).map(|p| p.state), Some(PanelState::Collapsed));
    }

    #[test]
    fn expand_then_collapse_returns_to_all_collapsed() {
        let mut state = AccordionState::new("faq", 4);
        state.toggle(2);
        state.toggle(2);
        assert_eq!(state.expanded_index(), None);
    }

    #[test]
    fn panel_two_then_five_leaves_only_five_open() {
        let mut state = AccordionState::new("faq", 6);
        state.toggle(1);
        state.toggle(4);
        assert_eq!(expanded(&state), vec![4]);
        let five = state.panel(4).expect("panel #5");
        assert_eq!(five.icon(), "−");
        assert_eq!(five.aria_expanded(), "true");
        assert_eq!(state.panel(1).map(|p| p.aria_expanded()), Some("false"));
    }

    #[test]
    fn at_most_one_panel_open_under_any_sequence() {
        let mut state = AccordionState::new("faq", 5);
        for step in [3, 1, 1, 4, 0, 0, 2, 3, 4, 4, 9] {
            state.toggle(step);
            assert!(expanded(&state).len() <= 1);
        }
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut state = AccordionState::new("faq", 2);
        state.toggle(0);
        assert!(!state.toggle(5));
        assert_eq!(state.expanded_index(), Some(0));
    }

    #[test]
    fn ids_link_question_and_answer() {
        let mut state = AccordionState::new("faq", 2);
        let panel = state.panel(1).cloned().expect("panel");
        assert_eq!(panel.id, "faq-question-1");
        assert_eq!(panel.content_id, "faq-answer-1");
        assert!(state.toggle_by_id("faq-question-1"));
        assert_eq!(state.expanded_index(), Some(1));
        assert!(!state.toggle_by_id("faq-question-9"));
    }

    #[test]
    fn reset_collapses_and_resizes() {
        let mut state = AccordionState::new("faq", 2);
        state.toggle(1);
        state.reset(5);
        assert_eq!(state.len(), 5);
        assert_eq!(state.expanded_index(), None);
    }
}
