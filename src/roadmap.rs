/// Labels shown in the road-map window, in order
pub const STEPS: [&str; 11] = [
    "The road-map",
    "Getting started",
    "C++20 so far",
    "Reading SFML input states",
    "Managing game state",
    "Making our game testable",
    "Making game state allocator-aware",
    "Add logging to game engine",
    "Draw a game map",
    "Dialog trees",
    "Porting from SFML to SDL",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub label: &'static str,
    pub done: bool,
}

/// Ordered checklist of development steps
#[derive(Debug, Clone, PartialEq)]
pub struct Roadmap {
    steps: Vec<Step>,
}

impl Default for Roadmap {
    fn default() -> Self {
        Self {
            steps: STEPS.iter().map(|&label| Step { label, done: false }).collect(),
        }
    }
}

impl Roadmap {
    /// Restore from saved step indices. Indices past the end are ignored.
    pub fn with_completed(completed: &[usize]) -> Self {
        let mut roadmap = Self::default();
        for &index in completed {
            match roadmap.steps.get_mut(index) {
                Some(step) => step.done = true,
                None => log::warn!("Ignoring unknown road-map step {}", index),
            }
        }
        roadmap
    }

    #[allow(dead_code)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut [Step] {
        &mut self.steps
    }

    #[allow(dead_code)]
    pub fn toggle(&mut self, index: usize) {
        if let Some(step) = self.steps.get_mut(index) {
            step.done = !step.done;
        }
    }

    pub fn completed(&self) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.done)
            .map(|(index, _)| index)
            .collect()
    }

    /// Fraction of steps ticked, for the progress bar
    pub fn progress(&self) -> f32 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.completed().len() as f32 / self.steps.len() as f32
    }

    /// "N: label", the way the window lists them
    pub fn display_label(index: usize, step: &Step) -> String {
        format!("{}: {}", index, step.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unticked() {
        let roadmap = Roadmap::default();
        assert_eq!(roadmap.steps().len(), 11);
        assert!(roadmap.completed().is_empty());
        assert_eq!(roadmap.progress(), 0.0);
    }

    #[test]
    fn toggle_and_progress() {
        let mut roadmap = Roadmap::default();
        roadmap.toggle(3);
        roadmap.toggle(0);
        roadmap.toggle(42);
        assert_eq!(roadmap.completed(), vec![0, 3]);
        roadmap.toggle(0);
        assert_eq!(roadmap.completed(), vec![3]);
        assert!((roadmap.progress() - 1.0 / 11.0).abs() < f32::EPSILON);
    }

    #[test]
    fn restores_completed_steps() {
        let roadmap = Roadmap::with_completed(&[1, 10, 99]);
        assert_eq!(roadmap.completed(), vec![1, 10]);
        assert_eq!(
            Roadmap::display_label(3, &roadmap.steps()[3]),
            "3: Reading SFML input states"
        );
    }
}
