use super::*;

impl QuizWizard {
    /// `(paso + 1) / total * 100`, se recalcula en cada consulta
    pub fn progress_percentage(&self) -> f64 {
        let total = self.step_count();
        if total == 0 {
            return 0.0;
        }
        (self.current_step + 1) as f64 * 100.0 / total as f64
    }

    /// Lo mismo en [0, 1], para `egui::ProgressBar`
    pub fn progress_fraction(&self) -> f32 {
        (self.progress_percentage() / 100.0) as f32
    }

    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.current_step + 1, self.step_count())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::wizard_at;

    #[test]
    fn percentage_at_first_and_last_step() {
        assert_eq!(wizard_at(0).progress_percentage(), 100.0 / 6.0);
        assert_eq!(wizard_at(5).progress_percentage(), 100.0);
        assert_eq!(wizard_at(5).progress_fraction(), 1.0);
    }

    #[test]
    fn percentage_grows_with_each_step() {
        let values: Vec<f64> = (0..6).map(|i| wizard_at(i).progress_percentage()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(wizard_at(2).progress_percentage(), 50.0);
    }

    #[test]
    fn label_is_one_based() {
        assert_eq!(wizard_at(0).progress_label(), "Step 1 of 6");
        assert_eq!(wizard_at(5).progress_label(), "Step 6 of 6");
    }
}
