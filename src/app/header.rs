use leptos::prelude::*;

use crate::section::Section;

#[component]
pub fn Header(
    active_section: ReadSignal<Section>,
    set_active_section: WriteSignal<Section>,
) -> impl IntoView {
    // Clicking a nav item claims the highlight immediately; the scroll
    // tracker may take it back once the smooth scroll lands.
    let nav_click = move |section: Section| {
        set_active_section.set(section);
        scroll_section_into_view(section);
    };

    view! {
        <header class="py-4 px-6 flex justify-between items-center sticky top-0 bg-gray-900 bg-opacity-95 backdrop-blur-md z-50 shadow-lg">
            <div class="text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-500 animate-slide-in-left">
                "Pradip"
            </div>
            <nav class="animate-slide-in-right">
                <ul class="flex space-x-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li
                                    class=move || {
                                        if active_section.get() == section {
                                            "cursor-pointer transition-colors duration-300 text-blue-400"
                                        } else {
                                            "cursor-pointer transition-colors duration-300 text-gray-300 hover:text-blue-400"
                                        }
                                    }
                                    on:click=move |_| nav_click(section)
                                >
                                    {section.label()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

fn scroll_section_into_view(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("nav target #{} not in document", section.id());
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
