use crate::domain::emulator::{EMULATOR_HOST_LOOPBACK, list_devices_command, run_device_command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSection {
    Android,
    Ports,
    Commands,
    Backend,
    GitHub,
}

impl ReferenceSection {
    pub const ALL: [ReferenceSection; 5] = [
        ReferenceSection::Android,
        ReferenceSection::Ports,
        ReferenceSection::Commands,
        ReferenceSection::Backend,
        ReferenceSection::GitHub,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            ReferenceSection::Android => "Android",
            ReferenceSection::Ports => "Ports",
            ReferenceSection::Commands => "Ionic CLI",
            ReferenceSection::Backend => "Backend Commands",
            ReferenceSection::GitHub => "GitHub Commands",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub label: String,
    pub value: String,
}

impl ReferenceEntry {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered label/value rows. Built once and only read afterwards.
#[derive(Debug, Clone)]
pub struct StaticReferenceTable {
    section: ReferenceSection,
    entries: Vec<ReferenceEntry>,
}

impl StaticReferenceTable {
    pub fn section(&self) -> ReferenceSection {
        self.section
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn lookup(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceTables {
    tables: Vec<StaticReferenceTable>,
}

impl ReferenceTables {
    pub fn new(emulator_name: &str, backend_commands: Vec<(String, String)>) -> Self {
        let android = vec![
            ReferenceEntry::new(
                "Default android url on simulator",
                format!("{EMULATOR_HOST_LOOPBACK}:3004"),
            ),
            ReferenceEntry::new("Listing available android devices", list_devices_command()),
            ReferenceEntry::new(
                "Running android simulator device",
                run_device_command(emulator_name),
            ),
        ];
        let ports: Vec<ReferenceEntry> = [
            ("Team", "3001"),
            ("Team Admin", "3002"),
            ("People", "3003"),
            ("Solo", "3004"),
        ]
        .into_iter()
        .map(|(label, port)| ReferenceEntry::new(label, port))
        .collect();
        let commands = vec![ReferenceEntry::new(
            "Syncing packages across platforms",
            "npx cap sync",
        )];
        let backend: Vec<ReferenceEntry> = backend_commands
            .into_iter()
            .map(|(label, command)| ReferenceEntry::new(label, command))
            .collect();
        let github = vec![
            ReferenceEntry::new("View grep branches", "git branch | grep \"pattern\""),
            ReferenceEntry::new(
                "Delete multiple branches from grep",
                "git branch | grep \"pattern\" | xargs git branch -D",
            ),
        ];

        let tables = ReferenceSection::ALL
            .into_iter()
            .zip([android, ports, commands, backend, github])
            .map(|(section, entries)| StaticReferenceTable { section, entries })
            .collect();

        Self { tables }
    }

    pub fn all(&self) -> &[StaticReferenceTable] {
        &self.tables
    }

    pub fn get(&self, section: ReferenceSection) -> Option<&StaticReferenceTable> {
        self.tables.iter().find(|table| table.section == section)
    }
}
