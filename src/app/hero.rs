use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="py-20 px-6 flex flex-col items-center justify-center text-center min-h-screen relative overflow-hidden">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_top_right,rgba(59,130,246,0.1),transparent_40%),radial-gradient(circle_at_bottom_left,rgba(147,51,234,0.1),transparent_40%)] z-0"></div>
            <h1 class="text-6xl font-bold mb-4 relative z-10 animate-fade-up">
                "Hi, I'm " <span class="text-blue-400">"Pradip"</span>
            </h1>
            <h2
                class="text-4xl font-semibold bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text mb-8 relative z-10 animate-fade-up"
                style:animation-delay="200ms"
            >
                "Full Stack Developer"
            </h2>
            <p
                class="max-w-2xl text-gray-300 mb-10 text-lg relative z-10 animate-fade-up"
                style:animation-delay="400ms"
            >
                "I create responsive and dynamic web applications using modern technologies.
                Passionate about crafting clean, efficient code and delivering exceptional user experiences."
            </p>
            <div class="flex flex-wrap justify-center gap-6 relative z-10">
                <a
                    href="#contact"
                    class="px-8 py-4 bg-gradient-to-r from-blue-600 to-blue-500 rounded-lg hover:from-blue-500 hover:to-blue-600 transition-all duration-300 hover:scale-105 active:scale-95 flex items-center gap-2 font-semibold shadow-lg animate-fade-up"
                    style:animation-delay="600ms"
                >
                    <span>"Contact Me"</span>
                </a>
                <a
                    href="/resume.pdf"
                    download="pradip_resume.pdf"
                    class="px-8 py-4 bg-gradient-to-r from-gray-700 to-gray-600 rounded-lg hover:from-gray-600 hover:to-gray-700 transition-all duration-300 hover:scale-105 active:scale-95 flex items-center gap-2 font-semibold shadow-lg animate-fade-up"
                    style:animation-delay="700ms"
                >
                    <i class="extra-download" />
                    <span>"Download Resume"</span>
                </a>
            </div>
            <div
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-fade-in"
                style:animation-delay="1200ms"
            >
                <div class="w-6 h-10 border-2 border-gray-400 rounded-full flex justify-center items-start p-1 animate-bob">
                    <div class="w-1.5 h-1.5 bg-blue-400 rounded-full" />
                </div>
            </div>
        </div>
    }
}
