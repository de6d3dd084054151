use leptos::prelude::ElementChild;
use leptos::component;
use leptos::IntoView;
use leptos::view;

use crate::components::Hero;

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <main>
        <Hero/>
      </main>
    }
}
