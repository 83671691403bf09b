use serde::{Deserialize, Serialize};
use stalk_core::{SLOTS, SlotSeries};

use crate::phase::{MultiplierRange, PhaseSpec};

/// One named generative recipe: ordered phases that together cover the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub name: String,
    pub phases: Vec<PhaseSpec>,
}

/// A shape with one concrete length chosen per phase, expanded to per-slot ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeLayout {
    pub lengths: Vec<usize>,
    pub slots: SlotSeries<MultiplierRange>,
}

impl ShapeSpec {
    pub fn new(name: &str, phases: Vec<PhaseSpec>) -> Self {
        Self {
            name: name.to_string(),
            phases,
        }
    }

    /// Every choice of phase lengths (each within its phase's range) summing to `SLOTS`
    pub fn length_assignments(&self) -> Vec<Vec<usize>> {
        let mut assignments = Vec::new();
        let mut current = Vec::with_capacity(self.phases.len());
        self.extend_assignment(0, SLOTS, &mut current, &mut assignments);
        assignments
    }

    fn extend_assignment(
        &self,
        phase: usize,
        remaining: usize,
        current: &mut Vec<usize>,
        assignments: &mut Vec<Vec<usize>>,
    ) {
        let Some(spec) = self.phases.get(phase) else {
            if remaining == 0 {
                assignments.push(current.clone());
            }
            return;
        };

        // Lengths the later phases can still absorb
        let rest = &self.phases[phase + 1..];
        let rest_min = rest.iter().fold(0usize, |acc, p| acc.saturating_add(p.min_len));
        let rest_max = rest.iter().fold(0usize, |acc, p| acc.saturating_add(p.max_len));

        for len in spec.min_len..=spec.max_len.min(remaining) {
            let left = remaining - len;
            if left < rest_min || left > rest_max {
                continue;
            }
            current.push(len);
            self.extend_assignment(phase + 1, left, current, assignments);
            current.pop();
        }
    }

    /// Expand every length assignment to per-slot multiplier ranges
    pub fn layouts(&self) -> Vec<ShapeLayout> {
        self.length_assignments()
            .into_iter()
            .map(|lengths| {
                let mut slots = [MultiplierRange::default(); SLOTS];
                let mut cursor = 0;
                for (phase, &len) in self.phases.iter().zip(&lengths) {
                    for offset in 0..len {
                        slots[cursor] = phase.slot_range(offset);
                        cursor += 1;
                    }
                }
                ShapeLayout { lengths, slots }
            })
            .collect()
    }
}
