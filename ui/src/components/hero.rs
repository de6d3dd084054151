use leptos::prelude::*;

use super::backdrop::Backdrop;

/// Heading, split where the `<br>` goes.
pub const HEADING: [&str; 2] = [
    "Handcrafted HTML, Tailwind and",
    "Bootstrap Templates and UI Kits",
];

pub const DESCRIPTION: &str = "High-quality landing page and website templates, handcrafted with \
    Tailwind CSS, Bootstrap, and HTML. Build beautiful websites without coding from scratch.";

pub const CTA_LABEL: &str = "Explore All Templates";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
      <section class="relative overflow-hidden pt-40 pb-20 lg:pt-48 lg:pb-24">
        <Backdrop/>

        <div class="relative mx-auto max-w-4xl text-center px-6">
          <h1 class="text-4xl font-bold md:text-6xl text-gray-900">
            {HEADING[0]}
            <br/>
            {HEADING[1]}
          </h1>

          <p class="mt-6 text-lg text-gray-600 max-w-2xl mx-auto">{DESCRIPTION}</p>

          // no action wired up yet
          <button
            type="button"
            class="mt-10 inline-flex items-center justify-center rounded-md bg-gray-900 text-white px-6 py-3 text-lg hover:bg-black transition"
          >
            {CTA_LABEL}
          </button>
        </div>
      </section>
    }
}
