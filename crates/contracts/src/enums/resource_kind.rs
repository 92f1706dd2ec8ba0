use serde::{Deserialize, Serialize};

/// Resource collections exposed by the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Projects,
    Consultants,
    Contractors,
    Agents,
    Lecturers,
    Institutions,
    Directors,
    JobSeekers,
    JobVacancies,
    Contact,
}

impl ResourceKind {
    /// Path segment of the collection, e.g. `/job-vacancies`
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "projects",
            ResourceKind::Consultants => "consultants",
            ResourceKind::Contractors => "contractors",
            ResourceKind::Agents => "agents",
            ResourceKind::Lecturers => "lecturers",
            ResourceKind::Institutions => "institutions",
            ResourceKind::Directors => "directors",
            ResourceKind::JobSeekers => "jobseekers",
            ResourceKind::JobVacancies => "job-vacancies",
            ResourceKind::Contact => "contact",
        }
    }

    /// Plural title for list pages and menus
    pub fn list_name(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "Projects",
            ResourceKind::Consultants => "Consultants",
            ResourceKind::Contractors => "Contractors",
            ResourceKind::Agents => "Agents & Suppliers",
            ResourceKind::Lecturers => "Lecturers",
            ResourceKind::Institutions => "Institutions",
            ResourceKind::Directors => "Directors",
            ResourceKind::JobSeekers => "Job Seekers",
            ResourceKind::JobVacancies => "Job Vacancies",
            ResourceKind::Contact => "Contact Messages",
        }
    }

    /// Singular title for detail pages and toasts
    pub fn element_name(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "Project",
            ResourceKind::Consultants => "Consultant",
            ResourceKind::Contractors => "Contractor",
            ResourceKind::Agents => "Agent",
            ResourceKind::Lecturers => "Lecturer",
            ResourceKind::Institutions => "Institution",
            ResourceKind::Directors => "Director",
            ResourceKind::JobSeekers => "Job Seeker",
            ResourceKind::JobVacancies => "Job Vacancy",
            ResourceKind::Contact => "Contact Message",
        }
    }

    /// The nine browsable directories, in menu order
    pub fn directories() -> [ResourceKind; 9] {
        [
            ResourceKind::Projects,
            ResourceKind::Consultants,
            ResourceKind::Contractors,
            ResourceKind::Agents,
            ResourceKind::Lecturers,
            ResourceKind::Institutions,
            ResourceKind::Directors,
            ResourceKind::JobSeekers,
            ResourceKind::JobVacancies,
        ]
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "projects" => Some(ResourceKind::Projects),
            "consultants" => Some(ResourceKind::Consultants),
            "contractors" => Some(ResourceKind::Contractors),
            "agents" => Some(ResourceKind::Agents),
            "lecturers" => Some(ResourceKind::Lecturers),
            "institutions" => Some(ResourceKind::Institutions),
            "directors" => Some(ResourceKind::Directors),
            "jobseekers" => Some(ResourceKind::JobSeekers),
            "job-vacancies" => Some(ResourceKind::JobVacancies),
            "contact" => Some(ResourceKind::Contact),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_roundtrip() {
        for kind in ResourceKind::directories() {
            assert_eq!(ResourceKind::from_path(kind.path()), Some(kind));
        }
        assert_eq!(ResourceKind::from_path("contact"), Some(ResourceKind::Contact));
        assert_eq!(ResourceKind::from_path("nope"), None);
    }

    #[test]
    fn test_jobseekers_path_has_no_dash() {
        assert_eq!(ResourceKind::JobSeekers.path(), "jobseekers");
        assert_eq!(ResourceKind::JobVacancies.path(), "job-vacancies");
    }
}
