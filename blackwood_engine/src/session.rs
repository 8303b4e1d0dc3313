//! Per-game session flags.
//!
//! These drive the main loop and feed the ending classifier once it stops.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub running: bool,
    pub has_escaped: bool,
    /// Only ever increases, by one per confirmed kill.
    pub monsters_defeated: u32,
}
impl Default for SessionState {
    fn default() -> Self {
        Self {
            running: true,
            has_escaped: false,
            monsters_defeated: 0,
        }
    }
}
impl SessionState {
    /// The player made it out. Terminal.
    pub fn escape(&mut self) {
        self.has_escaped = true;
        self.running = false;
    }

    pub fn record_kill(&mut self) {
        self.monsters_defeated = self.monsters_defeated.saturating_add(1);
    }

    /// Stop the loop without escaping (death or quit).
    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_stops_the_session() {
        let mut session = SessionState::default();
        assert!(session.running);
        session.escape();
        assert!(session.has_escaped);
        assert!(!session.running);
    }

    #[test]
    fn kills_count_up() {
        let mut session = SessionState::default();
        session.record_kill();
        session.record_kill();
        assert_eq!(session.monsters_defeated, 2);
    }
}
