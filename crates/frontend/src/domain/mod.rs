pub mod a001_project;
pub mod a002_consultant;
pub mod a003_contractor;
pub mod a004_agent;
pub mod a005_lecturer;
pub mod a006_institution;
pub mod a007_director;
pub mod a008_job_seeker;
pub mod a009_job_vacancy;
