use leptos::prelude::*;

use crate::form::ContactForm;

use super::skills::SectionHeading;

#[component]
pub fn ContactSection() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (ack, set_ack) = signal(None::<String>);

    view! {
        <div class="py-20 px-6">
            <SectionHeading text="Contact Me" />
            <div class="max-w-2xl mx-auto">
                <form
                    class="bg-gray-800 p-10 rounded-xl shadow-lg border border-gray-700 animate-fade-up"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        // required-field validation already passed here
                        let msg = set_form.try_update(|f| {
                            log::debug!(
                                "contact form submitted: {}",
                                serde_json::to_string(f).unwrap_or_default()
                            );
                            f.submit()
                        });
                        if let Some(msg) = msg {
                            set_ack.set(Some(msg));
                        }
                    }
                >
                    <div class="mb-6">
                        <label for="name" class="block text-sm font-medium text-gray-300 mb-2">
                            "Name"
                        </label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                set_form.update(|f| f.apply("name", event_target_value(&ev)))
                            }
                            required=true
                            class="w-full p-4 bg-gray-700 rounded-lg border border-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent text-white transition-all duration-300"
                            placeholder="Your name"
                        />
                    </div>
                    <div class="mb-6">
                        <label for="email" class="block text-sm font-medium text-gray-300 mb-2">
                            "Email"
                        </label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                set_form.update(|f| f.apply("email", event_target_value(&ev)))
                            }
                            required=true
                            class="w-full p-4 bg-gray-700 rounded-lg border border-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent text-white transition-all duration-300"
                            placeholder="your@email.com"
                        />
                    </div>
                    <div class="mb-8">
                        <label for="message" class="block text-sm font-medium text-gray-300 mb-2">
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| {
                                set_form.update(|f| f.apply("message", event_target_value(&ev)))
                            }
                            required=true
                            rows="5"
                            class="w-full p-4 bg-gray-700 rounded-lg border border-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent text-white resize-none transition-all duration-300"
                            placeholder="Your message..."
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-4 bg-gradient-to-r from-blue-600 to-blue-500 text-white rounded-lg hover:from-blue-500 hover:to-blue-600 transition-all duration-300 hover:scale-[1.02] active:scale-[0.98] flex items-center justify-center gap-2 font-semibold shadow-md"
                    >
                        "Send Message"
                    </button>
                </form>
                {move || {
                    ack.get()
                        .map(|msg| {
                            view! {
                                <div
                                    role="status"
                                    class="mt-6 p-4 bg-green-900/40 border border-green-500 rounded-lg text-green-300 text-center animate-fade-in"
                                >
                                    {msg}
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
