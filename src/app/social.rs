use leptos::prelude::*;

use super::skills::SectionHeading;

#[component]
pub fn SocialProfiles() -> impl IntoView {
    view! {
        <div class="py-20 px-6 bg-gray-800 bg-[radial-gradient(ellipse_at_bottom,rgba(25,30,40,0.5),rgba(15,20,30,1))]">
            <SectionHeading text="Social Profiles" />
            <p class="text-center text-gray-300 mb-12 text-lg animate-fade-in" style:animation-delay="200ms">
                "Click on social media icons to check out.."
            </p>
            <div class="flex justify-center space-x-10 mb-16">
                <a
                    href="https://linkedin.com"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn Profile"
                    class="bg-gradient-to-br from-blue-600 to-blue-700 p-5 rounded-full shadow-lg transform transition-all duration-300 hover:-translate-y-2 hover:scale-110 animate-pop-in"
                    style:animation-delay="300ms"
                >
                    <i class="devicon-linkedin-plain text-3xl text-white" />
                </a>
                <a
                    href="https://github.com"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub Profile"
                    class="bg-gradient-to-br from-gray-700 to-gray-800 p-5 rounded-full shadow-lg transform transition-all duration-300 hover:-translate-y-2 hover:scale-110 animate-pop-in"
                    style:animation-delay="400ms"
                >
                    <i class="devicon-github-original text-3xl text-white" />
                </a>
                <a
                    href="mailto:pradip@example.com"
                    aria-label="Email"
                    class="bg-gradient-to-br from-pink-600 to-pink-700 p-5 rounded-full shadow-lg transform transition-all duration-300 hover:-translate-y-2 hover:scale-110 animate-pop-in"
                    style:animation-delay="500ms"
                >
                    <i class="extra-email text-3xl text-white" />
                </a>
            </div>
        </div>
    }
}
