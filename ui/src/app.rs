use leptos::prelude::*;

use crate::document::RootDocument;
use crate::pages::Home;

#[component]
pub fn App() -> impl IntoView {
    view! {
      <RootDocument>
        <Home/>
      </RootDocument>
    }
}
