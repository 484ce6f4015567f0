use crate::domain::branch::BranchCategory;

#[derive(Debug, Clone)]
pub struct TicketRequest {
    pub category: BranchCategory,
    pub ticket_id: String,
    pub title: String,
}

impl TicketRequest {
    pub fn new(
        category: BranchCategory,
        ticket_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            category,
            ticket_id: ticket_id.into(),
            title: title.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        is_present(&self.ticket_id) && is_present(&self.title)
    }
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_make_request_incomplete() {
        assert!(TicketRequest::new(BranchCategory::Bugs, "ID", "T").is_complete());
        assert!(!TicketRequest::new(BranchCategory::Bugs, "", "T").is_complete());
        assert!(!TicketRequest::new(BranchCategory::Bugs, "ID", "   ").is_complete());
    }
}
