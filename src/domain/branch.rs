use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchCategory {
    #[default]
    Features,
    Bugs,
    Refactor,
    QA,
}

impl BranchCategory {
    /// Selection order; index 0 is the default category.
    pub const ALL: [BranchCategory; 4] = [
        BranchCategory::Features,
        BranchCategory::Bugs,
        BranchCategory::Refactor,
        BranchCategory::QA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BranchCategory::Features => "features",
            BranchCategory::Bugs => "bugs",
            BranchCategory::Refactor => "refactor",
            BranchCategory::QA => "qa",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "features" => Some(BranchCategory::Features),
            "bugs" => Some(BranchCategory::Bugs),
            "refactor" => Some(BranchCategory::Refactor),
            "qa" => Some(BranchCategory::QA),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_parts(
        category: BranchCategory,
        date: NaiveDate,
        date_separator: &str,
        ticket_id: &str,
        title: &str,
    ) -> Self {
        Self(format!(
            "{}/{}_{}_{}",
            category.as_str(),
            format_date(date, date_separator),
            ticket_id,
            normalize_title(title)
        ))
    }
}

/// Spaces become underscores; everything else passes through untouched.
pub fn normalize_title(title: &str) -> String {
    title.replace(' ', "_")
}

pub fn format_date(date: NaiveDate, separator: &str) -> String {
    format!(
        "{:04}{separator}{:02}{separator}{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builds_branch_name() {
        let name = BranchName::from_parts(
            BranchCategory::Bugs,
            date(2024, 11, 21),
            "",
            "ABC-12",
            "Fix login bug",
        );
        assert_eq!(name.as_str(), "bugs/20241121_ABC-12_Fix_login_bug");
    }

    #[test]
    fn zero_pads_month_and_day() {
        assert_eq!(format_date(date(2024, 3, 5), ""), "20240305");
        assert_eq!(format_date(date(2024, 3, 5), "-"), "2024-03-05");
    }

    #[test]
    fn normalization_only_touches_spaces() {
        assert_eq!(normalize_title("Add  user\tlist!"), "Add__user\tlist!");
        assert_eq!(normalize_title("Already_underscored"), "Already_underscored");
        let once = normalize_title("a b c");
        assert_eq!(normalize_title(&once), once);
    }

    #[test]
    fn parses_branch_category() {
        assert_eq!(
            BranchCategory::from_str(" Features "),
            Some(BranchCategory::Features)
        );
        assert_eq!(BranchCategory::from_str("QA"), Some(BranchCategory::QA));
        assert_eq!(BranchCategory::from_str("unknown"), None);
    }

    #[test]
    fn selects_category_by_position() {
        assert_eq!(BranchCategory::from_index(0), Some(BranchCategory::default()));
        assert_eq!(BranchCategory::from_index(2), Some(BranchCategory::Refactor));
        assert_eq!(BranchCategory::from_index(4), None);
    }
}
