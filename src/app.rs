mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod loading;
mod skills;
mod social;

use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_use::{use_event_listener, use_throttle_fn, use_window};

use crate::section::{section_under_probe, Section, SectionBox};

use contact::ContactSection;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use loading::LoadingSkeleton;
use skills::{SkillCards, Technologies};
use social::SocialProfiles;

/// How long the loading skeleton stays up before the content is revealed.
const LOADING_DELAY: Duration = Duration::from_millis(1800);

/// Minimum interval between scroll measurements.
const SCROLL_THROTTLE_MS: f64 = 100.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (loading, set_loading) = signal(true);
    let (active_section, set_active_section) = signal(Section::Home);

    // One-shot reveal timer. The handle is cleared if the view is torn down
    // first, and a late fire after disposal is a no-op.
    Effect::new(move |_| {
        match set_timeout_with_handle(
            move || {
                let _ = set_loading.try_set(false);
            },
            LOADING_DELAY,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => log::error!("failed to schedule content reveal: {err:?}"),
        }
    });

    // Re-measure all four sections against the reference line on scroll. The
    // listener is detached when the component scope is disposed.
    let track_scroll = use_throttle_fn(
        move || {
            let doc = document();
            let hit = section_under_probe(Section::ALL.into_iter().map(|section| {
                let rect = doc.get_element_by_id(section.id()).map(|el| {
                    let r = el.get_bounding_client_rect();
                    SectionBox {
                        top: r.top(),
                        bottom: r.bottom(),
                    }
                });
                (section, rect)
            }));
            // no match means we keep whatever was active before
            if let Some(section) = hit {
                set_active_section.set(section);
            }
        },
        SCROLL_THROTTLE_MS,
    );
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        track_scroll();
    });

    view! {
        <Title text="Pradip - Full Stack Developer" />
        <Meta
            name="description"
            content="Portfolio of Pradip, a Full Stack Developer creating responsive and dynamic web applications."
        />
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSkeleton /> }>
            <div class="min-h-screen bg-gradient-to-b from-gray-900 to-gray-800 text-white selection:bg-blue-600 selection:text-white">
                <Header active_section=active_section set_active_section=set_active_section />
                <main class="overflow-hidden">
                    <section id=Section::Home.id() class="relative">
                        <Hero />
                    </section>
                    <section id=Section::Skills.id()>
                        <SkillCards />
                        <Technologies />
                    </section>
                    <section id=Section::Experience.id()>
                        <Experience />
                    </section>
                    <section id=Section::Contact.id()>
                        <ContactSection />
                    </section>
                    <SocialProfiles />
                </main>
                <Footer />
            </div>
        </Show>
    }
}
