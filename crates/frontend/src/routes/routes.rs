use crate::domain::a001_project::ui::details::ProjectDetails;
use crate::domain::a001_project::ui::list::ProjectList;
use crate::domain::a002_consultant::ui::details::ConsultantDetails;
use crate::domain::a002_consultant::ui::list::ConsultantList;
use crate::domain::a003_contractor::ui::details::ContractorDetails;
use crate::domain::a003_contractor::ui::list::ContractorList;
use crate::domain::a004_agent::ui::details::AgentDetails;
use crate::domain::a004_agent::ui::list::AgentList;
use crate::domain::a005_lecturer::ui::details::LecturerDetails;
use crate::domain::a005_lecturer::ui::list::LecturerList;
use crate::domain::a006_institution::ui::details::InstitutionDetails;
use crate::domain::a006_institution::ui::list::InstitutionList;
use crate::domain::a007_director::ui::details::DirectorDetails;
use crate::domain::a007_director::ui::list::DirectorList;
use crate::domain::a008_job_seeker::ui::details::JobSeekerDetails;
use crate::domain::a008_job_seeker::ui::list::JobSeekerList;
use crate::domain::a009_job_vacancy::ui::details::JobVacancyDetails;
use crate::domain::a009_job_vacancy::ui::list::JobVacancyList;
use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::system::admin::dashboard::AdminDashboard;
use crate::system::admin::layout::AdminLayout;
use crate::system::admin::resource_list::AdminResourcePage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
fn AdminHome() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminLayout>
                <AdminDashboard />
            </AdminLayout>
        </RequireAuth>
    }
}

/// `/admin/jobseekers` and the other directories
#[component]
fn AdminResource() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminLayout>
                <AdminResourcePage />
            </AdminLayout>
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/contact") view=ContactPage />

                <Route path=path!("/projects") view=ProjectList />
                <Route path=path!("/projects/:id") view=ProjectDetails />
                <Route path=path!("/consultants") view=ConsultantList />
                <Route path=path!("/consultants/:id") view=ConsultantDetails />
                <Route path=path!("/contractors") view=ContractorList />
                <Route path=path!("/contractors/:id") view=ContractorDetails />
                <Route path=path!("/agents") view=AgentList />
                <Route path=path!("/agents/:id") view=AgentDetails />
                <Route path=path!("/lecturers") view=LecturerList />
                <Route path=path!("/lecturers/:id") view=LecturerDetails />
                <Route path=path!("/institutions") view=InstitutionList />
                <Route path=path!("/institutions/:id") view=InstitutionDetails />
                <Route path=path!("/directors") view=DirectorList />
                <Route path=path!("/directors/:id") view=DirectorDetails />
                <Route path=path!("/jobseekers") view=JobSeekerList />
                <Route path=path!("/jobseekers/:id") view=JobSeekerDetails />
                <Route path=path!("/job-vacancies") view=JobVacancyList />
                <Route path=path!("/job-vacancies/:id") view=JobVacancyDetails />

                <Route path=path!("/admin/login") view=LoginPage />
                <Route path=path!("/admin") view=AdminHome />
                <Route path=path!("/admin/:resource") view=AdminResource />
            </Routes>
        </Shell>
    }
}
