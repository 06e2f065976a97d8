use leptos::prelude::*;

struct Skill {
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const SKILLS: [Skill; 3] = [
    Skill {
        title: "UI/UX Designer",
        description: "Creating beautiful, intuitive interfaces with a focus on user experience and accessibility.",
        gradient: "from-purple-500 to-pink-500",
    },
    Skill {
        title: "Full Stack Web Developer",
        description: "Building end-to-end web applications with modern frontend and backend technologies.",
        gradient: "from-blue-500 to-teal-500",
    },
    Skill {
        title: "Software Engineer",
        description: "Developing robust, scalable software solutions to solve complex problems.",
        gradient: "from-green-500 to-emerald-500",
    },
];

struct Tech {
    name: &'static str,
    icon: &'static str,
    color: &'static str,
}

const TECHNOLOGIES: [Tech; 19] = [
    Tech { name: "HTML5", icon: "devicon-html5-plain", color: "text-orange-500" },
    Tech { name: "CSS3", icon: "devicon-css3-plain", color: "text-blue-400" },
    Tech { name: "JavaScript", icon: "devicon-javascript-plain", color: "text-yellow-400" },
    Tech { name: "React.js", icon: "devicon-react-original", color: "text-blue-300" },
    Tech { name: "Tailwind CSS", icon: "devicon-tailwindcss-original", color: "text-teal-400" },
    Tech { name: "Redux Toolkit", icon: "devicon-redux-original", color: "text-purple-400" },
    Tech { name: "Node.js", icon: "devicon-nodejs-plain", color: "text-green-500" },
    Tech { name: "Express.js", icon: "devicon-express-original", color: "text-gray-400" },
    Tech { name: "MongoDB", icon: "devicon-mongodb-plain", color: "text-green-400" },
    Tech { name: "Bootstrap", icon: "devicon-bootstrap-plain", color: "text-purple-500" },
    Tech { name: "TypeScript", icon: "devicon-typescript-plain", color: "text-blue-500" },
    Tech { name: "Git", icon: "devicon-git-plain", color: "text-orange-600" },
    Tech { name: "GitHub", icon: "devicon-github-original", color: "text-gray-300" },
    Tech { name: "Postman API", icon: "devicon-postman-plain", color: "text-orange-500" },
    Tech { name: "Framer Motion", icon: "devicon-framermotion-original", color: "text-pink-400" },
    Tech { name: "MySQL", icon: "devicon-mysql-plain", color: "text-blue-600" },
    Tech { name: "C++", icon: "devicon-cplusplus-plain", color: "text-blue-500" },
    Tech { name: "C", icon: "devicon-c-plain", color: "text-blue-400" },
    Tech { name: "JSON", icon: "devicon-json-plain", color: "text-yellow-300" },
];

#[component]
pub fn SkillCards() -> impl IntoView {
    view! {
        <div class="py-20 px-6">
            <SectionHeading text="My Skills" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-10 max-w-6xl mx-auto">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <div
                                class=format!(
                                    "p-8 rounded-xl bg-gradient-to-br {} shadow-lg transform transition-all duration-300 hover:-translate-y-2.5 animate-fade-up",
                                    skill.gradient,
                                )
                                style:animation-delay=format!("{}ms", i * 200)
                            >
                                <h3 class="text-2xl font-bold mb-4">{skill.title}</h3>
                                <p class="text-gray-100 text-lg">{skill.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Technologies() -> impl IntoView {
    view! {
        <div class="py-20 px-6 bg-gray-800 bg-[radial-gradient(ellipse_at_top,rgba(25,30,40,0.5),rgba(15,20,30,1))]">
            <SectionHeading text="Technologies I Work With" />
            <div class="max-w-6xl mx-auto grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-6">
                {TECHNOLOGIES
                    .iter()
                    .enumerate()
                    .map(|(i, tech)| {
                        view! {
                            <div
                                class="flex flex-col items-center justify-center bg-gray-900 bg-opacity-70 p-5 rounded-lg backdrop-blur-sm border border-gray-800 transition-all duration-300 hover:-translate-y-1 hover:scale-110 animate-pop-in"
                                style:animation-delay=format!("{}ms", i * 50)
                            >
                                <i class=format!("text-4xl {} {} mb-2", tech.icon, tech.color) />
                                <span class="text-sm text-center font-medium">{tech.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Centered section heading with the gradient underline used across the page.
#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl font-bold text-center mb-16 relative animate-fade-in">
            <span class="relative z-10">{text}</span>
            <span class="absolute -bottom-3 left-1/2 transform -translate-x-1/2 h-1 w-24 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full"></span>
        </h2>
    }
}
