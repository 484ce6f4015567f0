const CHANGES_PLACEHOLDER: &str = "<changes>";

const CHECKLIST: &str = "\n\n ## Checklist\n\
- [ ] Desktop/mobile responsive\n\
- [ ] Light/dark themes\n\
- [ ] En/Fr/Sp support\n\
- [ ] Mixpanel events\n\
- [ ] SonarCloud issues";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestBundle {
    pub title: String,
    pub body: String,
}

impl PullRequestBundle {
    pub fn from_parts(
        ticket_id: &str,
        title: &str,
        tracker_base_url: &str,
        include_checklist: bool,
    ) -> Self {
        let mut body = format!(
            "## Description\n {CHANGES_PLACEHOLDER} \n\n## Ticket\n[{ticket_id}]({})",
            browse_url(tracker_base_url, ticket_id)
        );
        if include_checklist {
            body.push_str(CHECKLIST);
        }

        Self {
            title: format!("[{ticket_id}] {title}"),
            body,
        }
    }
}

pub fn browse_url(base_url: &str, ticket_id: &str) -> String {
    format!("{}/browse/{}", base_url.trim_end_matches('/'), ticket_id)
}
