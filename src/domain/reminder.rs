#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reminder {
    MoveToInProgress { ticket_id: String },
    MoveToInReview { ticket_id: String },
}

impl Reminder {
    pub fn title(&self) -> &'static str {
        "Reminder"
    }

    pub fn message(&self) -> String {
        match self {
            Reminder::MoveToInProgress { ticket_id } => {
                format!("Move ticket {ticket_id} to In Progress")
            }
            Reminder::MoveToInReview { ticket_id } => {
                format!("Move ticket {ticket_id} to In Review")
            }
        }
    }
}
