//! Step validators.
//!
//! Pure functions deciding whether a step's data is complete enough to
//! advance. [`issues`] lists every problem so the view layer can render
//! inline messages; [`validate`] is the boolean gate used by the wizard.

use serde::Serialize;

use super::payload::{
    CareerGoalsPayload, PreferencesPayload, ResumeUploadPayload, SkillsAssessmentPayload,
    StepPayload, MAX_INDUSTRIES, MAX_LOCATION_PREFERENCES, MAX_ROLES, MAX_SELECTED_SKILLS, MAX_SKILL_RATING,
    MIN_RATED_SKILLS, MIN_SELECTED_SKILLS, MIN_SKILL_RATING,
};
use super::step::StepKey;

/// A single reason a step cannot be completed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("no answers recorded for step `{step}`")]
    NoData { step: StepKey },
    #[error("payload for `{actual}` was given to step `{expected}`")]
    WrongStep { expected: StepKey, actual: StepKey },
    #[error("`{field}` is required")]
    Missing { field: &'static str },
    #[error("`{field}` needs at least {min} entries, got {actual}")]
    TooFew {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    #[error("`{field}` allows at most {max} entries, got {actual}")]
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("`{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Returns `true` when `payload` exists, belongs to `key` and is complete.
pub fn validate(key: StepKey, payload: Option<&StepPayload>) -> bool {
    issues_for(key, payload).is_empty()
}

/// Like [`issues`], but also reports absent or misplaced payloads.
pub fn issues_for(key: StepKey, payload: Option<&StepPayload>) -> Vec<ValidationIssue> {
    match payload {
        None => vec![ValidationIssue::NoData { step: key }],
        Some(payload) if payload.key() != key => vec![ValidationIssue::WrongStep {
            expected: key,
            actual: payload.key(),
        }],
        Some(payload) => issues(payload),
    }
}

/// Every completeness problem of `payload`, empty when the step may advance.
pub fn issues(payload: &StepPayload) -> Vec<ValidationIssue> {
    let mut found = Vec::new();
    match payload {
        StepPayload::CareerGoals(p) => career_goals(p, &mut found),
        StepPayload::SkillsAssessment(p) => skills_assessment(p, &mut found),
        StepPayload::ResumeUpload(p) => resume_upload(p, &mut found),
        StepPayload::Preferences(p) => preferences(p, &mut found),
        // Every privacy field has a default.
        StepPayload::Privacy(_) => {}
    }
    found
}

fn career_goals(p: &CareerGoalsPayload, found: &mut Vec<ValidationIssue>) {
    require_non_empty("industries", p.industries.len(), found);
    require_at_most("industries", p.industries.len(), MAX_INDUSTRIES, found);
    require_non_empty("roles", p.roles.len(), found);
    require_at_most("roles", p.roles.len(), MAX_ROLES, found);
    if p.experience_level.is_none() {
        found.push(ValidationIssue::Missing {
            field: "experienceLevel",
        });
    }
    require_non_empty("careerGoals", p.career_goals.len(), found);
}

fn skills_assessment(p: &SkillsAssessmentPayload, found: &mut Vec<ValidationIssue>) {
    let selected = p.selected_skills.len();
    if selected < MIN_SELECTED_SKILLS {
        found.push(ValidationIssue::TooFew {
            field: "selectedSkills",
            min: MIN_SELECTED_SKILLS,
            actual: selected,
        });
    }
    require_at_most("selectedSkills", selected, MAX_SELECTED_SKILLS, found);

    let rated = p.skill_ratings.len();
    if rated < MIN_RATED_SKILLS {
        found.push(ValidationIssue::TooFew {
            field: "skillRatings",
            min: MIN_RATED_SKILLS,
            actual: rated,
        });
    }
    if let Some((skill, rating)) = p
        .skill_ratings
        .iter()
        .find(|(_, rating)| !(MIN_SKILL_RATING..=MAX_SKILL_RATING).contains(*rating))
    {
        found.push(ValidationIssue::Invalid {
            field: "skillRatings",
            reason: format!(
                "rating {rating} for `{skill}` is outside {MIN_SKILL_RATING}..={MAX_SKILL_RATING}"
            ),
        });
    }
}

fn resume_upload(p: &ResumeUploadPayload, found: &mut Vec<ValidationIssue>) {
    match &p.resume_file {
        None => found.push(ValidationIssue::Missing {
            field: "resumeFile",
        }),
        Some(file) => {
            if let Err(rejection) = file.check() {
                found.push(ValidationIssue::Invalid {
                    field: "resumeFile",
                    reason: rejection.to_string(),
                });
            }
        }
    }
}

fn preferences(p: &PreferencesPayload, found: &mut Vec<ValidationIssue>) {
    let range = &p.salary_range;
    // A zero amount counts as not entered.
    if matches!(range.min, None | Some(0)) {
        found.push(ValidationIssue::Missing {
            field: "salaryRange.min",
        });
    }
    if matches!(range.max, None | Some(0)) {
        found.push(ValidationIssue::Missing {
            field: "salaryRange.max",
        });
    }
    if let (Some(min), Some(max)) = (range.min, range.max) {
        if min > max {
            found.push(ValidationIssue::Invalid {
                field: "salaryRange",
                reason: format!("minimum {min} is above maximum {max}"),
            });
        }
    }
    if p.remote_work.is_none() {
        found.push(ValidationIssue::Missing {
            field: "remoteWork",
        });
    }
    require_non_empty("workArrangement", p.work_arrangement.len(), found);
    require_at_most(
        "locationPreferences",
        p.location_preferences.len(),
        MAX_LOCATION_PREFERENCES,
        found,
    );
}

fn require_non_empty(field: &'static str, len: usize, found: &mut Vec<ValidationIssue>) {
    if len == 0 {
        found.push(ValidationIssue::Missing { field });
    }
}

fn require_at_most(field: &'static str, len: usize, max: usize, found: &mut Vec<ValidationIssue>) {
    if len > max {
        found.push(ValidationIssue::TooMany {
            field,
            max,
            actual: len,
        });
    }
}
