//! Linear onboarding wizard that builds the user's profile.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{PartnerError, PartnerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    Basics,
    Interests,
    Preferences,
    Complete,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::Welcome,
        OnboardingStep::Basics,
        OnboardingStep::Interests,
        OnboardingStep::Preferences,
        OnboardingStep::Complete,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome to PartnerGPT",
            OnboardingStep::Basics => "The Basics",
            OnboardingStep::Interests => "Your Interests",
            OnboardingStep::Preferences => "Your Preferences",
            OnboardingStep::Complete => "All Set!",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => {
                "Let's get to know each other better so I can be the best partner for you."
            }
            OnboardingStep::Basics => "Tell me a bit about yourself.",
            OnboardingStep::Interests => "What do you enjoy doing?",
            OnboardingStep::Preferences => "How would you like me to interact with you?",
            OnboardingStep::Complete => "You're ready to start your journey with PartnerGPT.",
        }
    }
}

pub const INTERESTS: [&str; 12] = [
    "Reading",
    "Movies",
    "Fitness",
    "Travel",
    "Music",
    "Cooking",
    "Art",
    "Technology",
    "Nature",
    "Sports",
    "Gaming",
    "Photography",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressStyle {
    Formal,
    #[default]
    Casual,
}

impl fmt::Display for AddressStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressStyle::Formal => write!(f, "formally"),
            AddressStyle::Casual => write!(f, "casually"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunicationStyle {
    #[default]
    Supportive,
    Direct,
    Analytical,
    Playful,
}

impl CommunicationStyle {
    pub const ALL: [CommunicationStyle; 4] = [
        CommunicationStyle::Supportive,
        CommunicationStyle::Direct,
        CommunicationStyle::Analytical,
        CommunicationStyle::Playful,
    ];
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommunicationStyle::Supportive => "Supportive and encouraging",
            CommunicationStyle::Direct => "Direct and straightforward",
            CommunicationStyle::Analytical => "Analytical and thoughtful",
            CommunicationStyle::Playful => "Playful and humorous",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub address_style: AddressStyle,
    pub communication_style: CommunicationStyle,
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    current: usize,
    profile: Profile,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        OnboardingStep::ALL[self.current]
    }

    pub fn step_index(&self) -> usize {
        self.current
    }

    /// Advance one step; stays on the final step.
    pub fn next(&mut self) -> OnboardingStep {
        if self.current < OnboardingStep::ALL.len() - 1 {
            self.current += 1;
        }
        self.step()
    }

    /// Go back one step; stays on the first step.
    pub fn back(&mut self) -> OnboardingStep {
        self.current = self.current.saturating_sub(1);
        self.step()
    }

    pub fn is_finished(&self) -> bool {
        self.step() == OnboardingStep::Complete
    }

    /// 0.0 on the welcome step, 1.0 once complete.
    pub fn progress(&self) -> f64 {
        self.current as f64 / (OnboardingStep::ALL.len() - 1) as f64
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_basics(&mut self, name: Option<&str>, birthday: Option<NaiveDate>) {
        self.profile.name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        self.profile.birthday = birthday;
    }

    /// Replace the interest selection. Every entry must be one of `INTERESTS`.
    pub fn set_interests<S: AsRef<str>>(&mut self, interests: &[S]) -> PartnerResult<()> {
        let mut chosen = Vec::new();
        for interest in interests {
            let interest = interest.as_ref();
            let known = INTERESTS
                .iter()
                .find(|i| i.eq_ignore_ascii_case(interest.trim()))
                .ok_or_else(|| {
                    PartnerError::Onboarding(format!("Unknown interest '{}'", interest))
                })?;
            if !chosen.iter().any(|c: &String| c.as_str() == *known) {
                chosen.push(known.to_string());
            }
        }
        self.profile.interests = chosen;
        Ok(())
    }

    pub fn set_preferences(&mut self, address: AddressStyle, communication: CommunicationStyle) {
        self.profile.address_style = address;
        self.profile.communication_style = communication;
    }

    /// Consume the wizard once it has reached the final step.
    pub fn finish(self) -> PartnerResult<Profile> {
        if !self.is_finished() {
            return Err(PartnerError::Onboarding(format!(
                "Onboarding stopped at step '{}'",
                self.step().title()
            )));
        }
        Ok(self.profile)
    }
}
