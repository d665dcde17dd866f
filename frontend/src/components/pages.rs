//! Static page shells.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="page home">
            <div class="hero">
                <h1>"Resume Optimizer"</h1>
                <p class="subtitle">
                    "Upload your resume, paste the job postings you are aiming for, "
                    "and get a version tailored to each of them."
                </p>
                <A href="/optimizer" class="upload-button">"Get started"</A>
            </div>
        </main>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <main class="page about">
            <h1>"About Us"</h1>
            <p>"We help job seekers present their experience in the words recruiters are looking for."</p>
        </main>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <main class="page contact">
            <h1>"Contact"</h1>
            <p>"Questions or feedback? Reach the team through the project repository."</p>
        </main>
    }
}
