use leptos::prelude::*;

/// Placeholder shown while the loading gate is closed. Pure presentation;
/// the reveal timer lives in [`super::App`].
#[component]
pub fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-900 to-gray-800 flex flex-col items-center justify-center">
            <div class="w-64 h-8 bg-gray-800 rounded-md mb-6 animate-skeleton-pulse" />
            <div class="space-y-4 w-full max-w-2xl px-4">
                {(0..3)
                    .map(|i| {
                        view! {
                            <div
                                class="h-48 bg-gray-800 rounded-lg w-full shadow-lg animate-skeleton-pulse"
                                style:animation-delay=format!("{}ms", i * 150)
                            />
                        }
                    })
                    .collect_view()}
                <div
                    class="h-64 bg-gray-800 rounded-lg w-full shadow-lg animate-skeleton-pulse"
                    style:animation-delay="600ms"
                />
            </div>
        </div>
    }
}
