use std::fmt;

/// Position in the wizard flow
///
/// Variants are declared in flow order, so the derived ordering matches the
/// sequence TYPE → STYLE → BRANDING → ... → DONE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Type,
    Style,
    Branding,
    DescriptionGeneration,
    DescriptionConfirm,
    CodeGeneration,
    Done,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Type,
        Step::Style,
        Step::Branding,
        Step::DescriptionGeneration,
        Step::DescriptionConfirm,
        Step::CodeGeneration,
        Step::Done,
    ];

    /// Steps the user fills in before anything is generated
    pub const INPUT_STEPS: [Step; 3] = [Step::Type, Step::Style, Step::Branding];

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Type => Some(Step::Style),
            Step::Style => Some(Step::Branding),
            Step::Branding => Some(Step::DescriptionGeneration),
            Step::DescriptionGeneration => Some(Step::DescriptionConfirm),
            Step::DescriptionConfirm => Some(Step::CodeGeneration),
            Step::CodeGeneration => Some(Step::Done),
            Step::Done => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Type => None,
            Step::Style => Some(Step::Type),
            Step::Branding => Some(Step::Style),
            Step::DescriptionGeneration => Some(Step::Branding),
            Step::DescriptionConfirm => Some(Step::DescriptionGeneration),
            Step::CodeGeneration => Some(Step::DescriptionConfirm),
            Step::Done => Some(Step::CodeGeneration),
        }
    }

    /// Generic back navigation is only offered strictly between TYPE and
    /// DESCRIPTION_GENERATION.
    pub fn shows_back(self) -> bool {
        self > Step::Type && self < Step::DescriptionGeneration
    }

    /// Whether the step collects input (and so appears in the step indicator)
    pub fn is_input_step(self) -> bool {
        self < Step::DescriptionGeneration
    }

    /// Whether an external generation call belongs to this step
    pub fn is_generating(self) -> bool {
        matches!(self, Step::DescriptionGeneration | Step::CodeGeneration)
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Type => "Type",
            Step::Style => "Style",
            Step::Branding => "Branding",
            Step::DescriptionGeneration => "Generating description",
            Step::DescriptionConfirm => "Confirm description",
            Step::CodeGeneration => "Generating code",
            Step::Done => "Done",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_flow_order() {
        for pair in Step::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Step::Type.previous(), None);
        assert_eq!(Step::Done.next(), None);
    }

    #[test]
    fn test_shows_back_only_for_style_and_branding() {
        let with_back: Vec<Step> = Step::ALL.into_iter().filter(|s| s.shows_back()).collect();
        assert_eq!(with_back, vec![Step::Style, Step::Branding]);
    }

    #[test]
    fn test_input_steps() {
        for step in Step::ALL {
            assert_eq!(step.is_input_step(), Step::INPUT_STEPS.contains(&step));
        }
        assert!(Step::CodeGeneration.is_generating());
        assert!(!Step::DescriptionConfirm.is_generating());
    }
}
