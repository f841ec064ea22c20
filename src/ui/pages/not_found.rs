//! Not found page component
//!
//! A 404 page styled as a missing newspaper edition.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with 404
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página não encontrada - Vlog Vintage" />
        <main class="not-found">
            <p class="edition">"Erro 404"</p>
            <h1 class="newspaper-title">"Edição Esgotada"</h1>
            <p>"A página que você procura não existe ou foi retirada de circulação."</p>
            <A href="/" attr:class="vintage-btn vintage-btn-primary">
                "Voltar para a capa"
            </A>
        </main>
    }
}
