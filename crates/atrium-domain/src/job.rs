//! Job and project-kind tags

/// Job position of a registered employee
///
/// The position is fixed at registration and decides which record variant
/// the employee is stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Job {
    /// Owns projects and manages developers
    Manager,

    /// Reports to exactly one manager
    Developer,
}

impl Job {
    /// Get the job name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Job::Manager => "manager",
            Job::Developer => "developer",
        }
    }

    /// Parse a job from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manager" => Some(Job::Manager),
            "developer" => Some(Job::Developer),
            _ => None,
        }
    }
}

impl std::str::FromStr for Job {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid job position: {}", s))
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of project requested at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// Developed by an internal team under a confidentiality level
    InHouse,

    /// Delegated to an external company
    Outsourced,
}

impl ProjectKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::InHouse => "inhouse",
            ProjectKind::Outsourced => "outsourced",
        }
    }

    /// Parse a project kind from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inhouse" => Some(ProjectKind::InHouse),
            "outsourced" => Some(ProjectKind::Outsourced),
            _ => None,
        }
    }
}

impl std::str::FromStr for ProjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid project type: {}", s))
    }
}
