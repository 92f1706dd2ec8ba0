use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <div class="footer__brand">"MEP Hub"</div>
                    <p>"Sri Lanka's directory for mechanical, electrical and plumbing professionals."</p>
                </div>
                <div class="footer__column">
                    <A href="/projects">"Projects"</A>
                    <A href="/job-vacancies">"Job vacancies"</A>
                    <A href="/jobseekers">"Job seekers"</A>
                </div>
                <div class="footer__column">
                    <A href="/about">"About"</A>
                    <A href="/contact">"Contact us"</A>
                </div>
            </div>
            <div class="footer__copyright">{format!("© {} MEP Hub", year)}</div>
        </footer>
    }
}
