use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-6 bg-gray-900 border-t border-gray-800">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between items-center">
                <div class="text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-500 mb-4 md:mb-0">
                    "Pradip"
                </div>
                <div class="text-gray-400 text-center md:text-right">
                    <p class="mb-2">
                        {format!("© {} Pradip. All rights reserved.", env!("BUILD_YEAR"))}
                    </p>
                    <p>
                        "Made with " <span class="text-red-500">"❤"</span>
                        " using Rust, Leptos & TailwindCSS"
                    </p>
                </div>
            </div>
        </footer>
    }
}
