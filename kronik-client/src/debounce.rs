/// Tracks which of several delayed actions is the latest one.
///
/// Each event bumps the generation and schedules its action with it; when
/// the delay elapses, the action only runs if no later event happened.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_event_fires() {
        let mut d = Debouncer::default();
        let a = d.bump();
        let b = d.bump();
        assert!(!d.is_current(a));
        assert!(d.is_current(b));
    }
}
