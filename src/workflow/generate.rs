use chrono::NaiveDate;

use crate::config::GeneratorConfig;
use crate::domain::branch::BranchName;
use crate::domain::emulator;
use crate::domain::pull_request::PullRequestBundle;
use crate::domain::reminder::Reminder;
use crate::domain::ticket::{TicketRequest, is_present};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
    pub value: T,
    pub reminder: Option<Reminder>,
}

/// Stateless: every output depends only on the arguments and the held config.
#[derive(Debug, Clone, Default)]
pub struct TicketTextGenerator {
    config: GeneratorConfig,
}

impl TicketTextGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns `None` when the ticket id or title is blank.
    pub fn generate_branch_name(
        &self,
        request: &TicketRequest,
        today: NaiveDate,
    ) -> Option<Generated<BranchName>> {
        if !request.is_complete() {
            return None;
        }

        let branch = BranchName::from_parts(
            request.category,
            today,
            &self.config.date_separator,
            &request.ticket_id,
            &request.title,
        );

        Some(Generated {
            value: branch,
            reminder: self.reminder(Reminder::MoveToInProgress {
                ticket_id: request.ticket_id.clone(),
            }),
        })
    }

    /// Returns `None` when the ticket id or title is blank.
    pub fn generate_pull_request(
        &self,
        ticket_id: &str,
        title: &str,
    ) -> Option<Generated<PullRequestBundle>> {
        if !is_present(ticket_id) || !is_present(title) {
            return None;
        }

        let bundle = PullRequestBundle::from_parts(
            ticket_id,
            title,
            &self.config.tracker_base_url,
            self.config.include_checklist,
        );

        Some(Generated {
            value: bundle,
            reminder: self.reminder(Reminder::MoveToInReview {
                ticket_id: ticket_id.to_string(),
            }),
        })
    }

    pub fn rewrite_host_for_emulator(&self, url: &str) -> String {
        emulator::rewrite_host_for_emulator(url)
    }

    fn reminder(&self, reminder: Reminder) -> Option<Reminder> {
        self.config.enable_reminders.then_some(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::branch::BranchCategory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn with_reminders() -> TicketTextGenerator {
        TicketTextGenerator::new(GeneratorConfig {
            enable_reminders: true,
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn generates_branch_name_for_supplied_date() {
        let generator = TicketTextGenerator::default();
        for category in BranchCategory::ALL {
            let request = TicketRequest::new(category, "ABC-7", "Add dark mode toggle");
            let generated = generator.generate_branch_name(&request, today()).unwrap();
            assert_eq!(
                generated.value.as_str(),
                format!("{}/20240305_ABC-7_Add_dark_mode_toggle", category.as_str())
            );
            assert_eq!(generated.reminder, None);
        }
    }

    #[test]
    fn declines_branch_name_for_blank_fields() {
        let generator = TicketTextGenerator::default();
        let missing_id = TicketRequest::new(BranchCategory::Features, "", "T");
        let missing_title = TicketRequest::new(BranchCategory::Features, "ID", "");
        assert!(generator.generate_branch_name(&missing_id, today()).is_none());
        assert!(generator.generate_branch_name(&missing_title, today()).is_none());
    }

    #[test]
    fn honours_configured_date_separator() {
        let generator = TicketTextGenerator::new(GeneratorConfig {
            date_separator: "-".to_string(),
            ..GeneratorConfig::default()
        });
        let request = TicketRequest::new(BranchCategory::QA, "Q-1", "Smoke");
        let generated = generator.generate_branch_name(&request, today()).unwrap();
        assert_eq!(generated.value.as_str(), "qa/2024-03-05_Q-1_Smoke");
    }

    #[test]
    fn generates_pull_request_bundle() {
        let generator = TicketTextGenerator::default();
        let generated = generator
            .generate_pull_request("ABC-1", "Fix login bug")
            .unwrap();
        assert_eq!(generated.value.title, "[ABC-1] Fix login bug");
        assert!(
            generated
                .value
                .body
                .contains("[ABC-1](https://headversity.atlassian.net/browse/ABC-1)")
        );
        assert!(generated.value.body.contains(" ## Checklist"));
    }

    #[test]
    fn declines_pull_request_for_blank_fields() {
        let generator = TicketTextGenerator::default();
        assert!(generator.generate_pull_request("", "Title").is_none());
        assert!(generator.generate_pull_request("ABC-1", "  ").is_none());
    }

    #[test]
    fn attaches_reminders_when_enabled() {
        let generator = with_reminders();
        let request = TicketRequest::new(BranchCategory::Bugs, "ABC-2", "Crash");
        let branch = generator.generate_branch_name(&request, today()).unwrap();
        assert_eq!(
            branch.reminder,
            Some(Reminder::MoveToInProgress {
                ticket_id: "ABC-2".to_string()
            })
        );

        let pr = generator.generate_pull_request("ABC-2", "Crash").unwrap();
        assert_eq!(
            pr.reminder,
            Some(Reminder::MoveToInReview {
                ticket_id: "ABC-2".to_string()
            })
        );
    }

    #[test]
    fn output_is_reproducible() {
        let generator = TicketTextGenerator::default();
        let request = TicketRequest::new(BranchCategory::Refactor, "R-3", "Split module");
        assert_eq!(
            generator.generate_branch_name(&request, today()),
            generator.generate_branch_name(&request, today())
        );
    }
}
