//! Newspaper front page
//!
//! The school vlog presented as a vintage newspaper:
//! - Masthead with the current date and a parallax drift while scrolling
//! - Course section with info cards and a sidebar
//! - Photo gallery with captions
//! - Creators grid
//! - Social network buttons

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::date::today_long_pt_br;
use crate::core::site::{Creator, creators};
use crate::ui::controller::PageInteractions;
use crate::ui::navigation::VintageNav;
use crate::ui::scroll_effects::use_scroll_frame;
use crate::ui::social::SocialLinks;
use crate::ui::typewriter::Headline;

#[component]
pub fn NewspaperPage() -> impl IntoView {
    let frame = use_scroll_frame();

    view! {
        <Title text="Vlog Vintage - Jornal da Turma de ADS" />
        <Meta
            name="description"
            content="Vlog Vintage: projeto escolar do curso de Análise e Desenvolvimento de Sistemas, turno da manhã."
        />

        <VintageNav frame=frame />

        <header
            id="inicio"
            class="newspaper-header"
            style=move || format!("transform: {};", frame.get().header_transform())
        >
            <div class="masthead">
                <p class="edition">"Edição Especial · Turno Manhã · 2° ano"</p>
                <h1 class="newspaper-title">"Vlog Vintage"</h1>
                <p class="newspaper-date">
                    <i class="far fa-calendar-alt"></i>
                    " "
                    <span id="current-date">{today_long_pt_br()}</span>
                </p>
            </div>
        </header>

        <main class="newspaper-body">
            <CourseSection />
            <GallerySection />
            <CreatorsSection />

            <section id="redes" class="newspaper-section">
                <Headline text="Acompanhe o Vlog" index=3 />
                <p class="section-lead fade-in">
                    "Assista aos episódios e veja os bastidores nas nossas redes."
                </p>
                <SocialLinks />
            </section>
        </main>

        <footer class="newspaper-footer">
            <p>"Feito com ❤️ pelas alunas de ADS - Turno Manhã"</p>
        </footer>

        <PageInteractions />
    }
}

#[component]
fn CourseSection() -> impl IntoView {
    view! {
        <section id="curso" class="newspaper-section">
            <Headline text="Análise e Desenvolvimento de Sistemas" index=0 />

            <div class="newspaper-columns">
                <div class="main-column">
                    <article class="course-info-card fade-in">
                        <h3><i class="fas fa-laptop-code"></i>" O que estudamos"</h3>
                        <p>
                            "Lógica de programação, bancos de dados, desenvolvimento web e "
                            "engenharia de software, sempre com projetos práticos."
                        </p>
                    </article>
                    <article class="course-info-card fade-in">
                        <h3><i class="fas fa-users"></i>" Nossa turma"</h3>
                        <p>
                            "Somos o 2° ano do ensino médio integrado, turno da manhã. "
                            "Este vlog registra o dia a dia do curso."
                        </p>
                    </article>
                    <article class="course-info-card fade-in">
                        <h3><i class="fas fa-video"></i>" Por que um vlog?"</h3>
                        <p>
                            "Para mostrar, com o charme dos jornais antigos, como é aprender "
                            "tecnologia na prática."
                        </p>
                    </article>
                </div>

                <aside class="sidebar">
                    <div class="sidebar-box slide-up">
                        <h4>"Em destaque"</h4>
                        <ul>
                            <li>"Feira de tecnologia da escola"</li>
                            <li>"Entrevista com professores"</li>
                            <li>"Projeto final do semestre"</li>
                        </ul>
                    </div>
                    <div class="sidebar-box slide-up">
                        <h4>"Curiosidade"</h4>
                        <p>"Digite o código secreto no teclado e veja o que acontece..."</p>
                    </div>
                </aside>
            </div>
        </section>
    }
}

#[component]
fn GallerySection() -> impl IntoView {
    let photos = [
        ("fas fa-chalkboard-teacher", "Aula de programação no laboratório."),
        ("fas fa-microphone", "Gravação do primeiro episódio."),
        ("fas fa-award", "Apresentação na feira de ciências."),
    ];

    view! {
        <section id="galeria" class="newspaper-section">
            <Headline text="Bastidores em Fotos" index=1 />
            <div class="photo-grid">
                {photos
                    .into_iter()
                    .map(|(icon, caption)| {
                        view! {
                            <figure class="photo-frame fade-in">
                                <div class="photo-placeholder">
                                    <i class=icon></i>
                                </div>
                                <figcaption class="photo-caption">{caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CreatorsSection() -> impl IntoView {
    let creators = creators().unwrap_or_else(|err| {
        leptos::logging::warn!("Failed to load creators: {}", err);
        Vec::new()
    });

    view! {
        <section id="criadoras" class="newspaper-section">
            <Headline text="Quem Faz o Vlog" index=2 />
            <div id="creators-grid" class="creators-grid">
                {creators
                    .into_iter()
                    .map(|creator| view! { <CreatorCard creator=creator /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CreatorCard(creator: Creator) -> impl IntoView {
    view! {
        <article class="creator-card slide-up">
            <div class="creator-avatar">
                <i class=creator.icon></i>
            </div>
            <h3 class="creator-name">{creator.name}</h3>
            <p class="creator-role">{creator.role}</p>
            <p class="creator-description">{creator.description}</p>
        </article>
    }
}
