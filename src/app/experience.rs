use leptos::prelude::*;

use super::skills::SectionHeading;

const HIGHLIGHTS: [&str; 5] = [
    "Developed and maintained responsive web applications using modern technologies like React, Next.js, and Node.js.",
    "Implemented RESTful APIs and integrated third-party services to enhance application functionality.",
    "Ensured website security and best practices by implementing authentication, authorization, and data protection techniques.",
    "Deployed and managed applications using cloud platforms, improving scalability and reliability.",
    "Contributed to business growth by delivering high-quality web solutions that enhanced client engagement and user retention.",
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <div class="py-20 px-6 bg-gray-900">
            <SectionHeading text="Work Experience" />
            <div class="max-w-3xl mx-auto bg-gray-800 rounded-xl p-10 shadow-lg border border-gray-700 animate-fade-up">
                <div class="flex items-center mb-6">
                    <div class="w-12 h-12 bg-blue-500 rounded-full flex items-center justify-center mr-4">
                        <i class="devicon-react-original text-2xl text-white" />
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-blue-400">"Full Stack Web Developer"</h3>
                        <h4 class="text-xl text-gray-300">"A2Z IT HUB"</h4>
                    </div>
                </div>
                <ul class="space-y-4 text-gray-300 text-lg">
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|point| {
                            view! {
                                <li class="flex items-start">
                                    <div class="mr-3 mt-1.5 text-blue-400 text-lg">"•"</div>
                                    <span>{point}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
