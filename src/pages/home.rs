use std::rc::Rc;

use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::RevealOnScroll;
use crate::components::smooth_link::SmoothScrollLink;
use crate::config::SiteConfig;
use crate::contact::instagram_url;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<Rc<SiteConfig>>();
    let Some(config) = config else {
        return html! {};
    };

    html! {
        <div class="landing-page">
            <style>{STYLES}</style>
            <Hero config={config.clone()} />
            <Studio config={config.clone()} />
            <Portfolio config={config.clone()} />
            <Contact config={config.clone()} />
            <Footer config={config} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    config: Rc<SiteConfig>,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let studio = &props.config.studio;

    html! {
        <section id="home" class="hero">
            <div class="hero-glow"></div>
            <div class="container">
                <RevealOnScroll>
                    <div class="hero-kicker">
                        <span class="kicker-accent">{format!("Desde {}", studio.since)}</span>
                        <span class="kicker-muted">{studio.city.clone()}</span>
                    </div>
                </RevealOnScroll>

                <RevealOnScroll delay={100}>
                    <h1 class="hero-title">
                        {"A Arte do "}<br />
                        <span class="hero-title-soft">{"Eterno."}</span>
                    </h1>
                </RevealOnScroll>

                <RevealOnScroll delay={200}>
                    <div class="hero-grid">
                        <div class="hero-image">
                            <img src={studio.hero_image.clone()} alt="Hero Tattoo" />
                            <div class="hero-badge">
                                <span class="pulse-dot"></span>
                                <span>{"Agenda Aberta"}</span>
                            </div>
                        </div>
                        <div class="hero-copy">
                            <p>
                                {"Um estúdio premiado focado na excelência do traço e na profundidade do significado. Especialistas em "}
                                <strong>{"Tebori"}</strong>{" e "}<strong>{"Oriental"}</strong>{"."}
                            </p>
                            <SmoothScrollLink href="#contact" class={classes!("hero-cta")}>
                                {"Agendar Sessão ↗"}
                            </SmoothScrollLink>
                        </div>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[function_component(Studio)]
fn studio(props: &SectionProps) -> Html {
    html! {
        <section id="studio" class="studio">
            <div class="container">
                <RevealOnScroll>
                    <div class="section-header">
                        <h2>{"O Processo"}</h2>
                        <div class="section-header-meta">
                            <p class="meta-label">{"Metodologia"}</p>
                            <p class="meta-value">{props.config.studio.awards.clone()}</p>
                        </div>
                    </div>
                </RevealOnScroll>

                <div class="steps-grid">
                    { for props.config.process.iter().enumerate().map(|(i, step)| html! {
                        <RevealOnScroll delay={i as u32 * 100}>
                            <div class="step">
                                <i class={format!("step-icon icon-{}", step.icon)}></i>
                                <h3>{step.title.clone()}</h3>
                                <p>{step.description.clone()}</p>
                            </div>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
fn portfolio(props: &SectionProps) -> Html {
    let profile = instagram_url(&props.config.studio.instagram);
    let alt = format!("Trabalho {}", props.config.studio.name);

    html! {
        <section id="portfolio" class="portfolio">
            <div class="container wide">
                <RevealOnScroll>
                    <div class="portfolio-header">
                        <h2>{"Masterpieces"}</h2>
                        <p>{"Cada linha conta uma história. Confira nossa seleção curada de trabalhos recentes."}</p>
                    </div>
                </RevealOnScroll>

                <div class="gallery-grid">
                    { for props.config.gallery.iter().enumerate().map(|(index, image)| html! {
                        <RevealOnScroll delay={index as u32 * 50}>
                            // second tile spans two rows on wide screens
                            <a
                                href={profile.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!("gallery-tile", if index == 1 { "gallery-tile-tall" } else { "gallery-tile-portrait" })}
                            >
                                <img src={image.clone()} alt={alt.clone()} loading="lazy" />
                                <div class="gallery-overlay">
                                    <span class="gallery-button">{"Ver no Instagram"}</span>
                                </div>
                            </a>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact(props: &SectionProps) -> Html {
    let studio = &props.config.studio;

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="contact-card">
                    <div class="contact-info">
                        <RevealOnScroll>
                            <h2>{"Pronto para eternizar sua ideia?"}</h2>
                            <p class="contact-lead">
                                {"Preencha o formulário para iniciar uma conversa direta no WhatsApp. Sem spam, apenas arte."}
                            </p>
                        </RevealOnScroll>

                        <RevealOnScroll delay={100}>
                            <div class="contact-item">
                                <div class="contact-icon">{"📍"}</div>
                                <div>
                                    <p class="meta-label">{"Localização"}</p>
                                    <p>{studio.city.clone()}</p>
                                </div>
                            </div>
                            <a href={instagram_url(&studio.instagram)} target="_blank" rel="noopener noreferrer" class="contact-item">
                                <div class="contact-icon">{"◎"}</div>
                                <div>
                                    <p class="meta-label">{"Siga-nos"}</p>
                                    <p>{format!("@{}", studio.instagram)}</p>
                                </div>
                            </a>
                        </RevealOnScroll>
                    </div>

                    <RevealOnScroll delay={200}>
                        <ContactForm recipient={studio.whatsapp.clone()} />
                    </RevealOnScroll>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let config = &props.config;

    html! {
        <footer class="site-footer">
            <h2>{config.studio.brand.clone()}</h2>
            <div class="footer-links">
                { for config.footer_sections().map(|item| html! {
                    <SmoothScrollLink href={format!("#{}", item.id)} class={classes!("footer-link")}>
                        {item.label.clone()}
                    </SmoothScrollLink>
                }) }
            </div>
            <p class="footer-credit">
                {"Desenvolvido com precisão por "}
                <a href={config.developer.site.clone()} target="_blank" rel="noopener noreferrer">
                    {config.developer.name.clone()}
                </a>
            </p>
        </footer>
    }
}

const STYLES: &str = r#"
    .landing-page {
        background: #FAFAFA;
        color: #111;
        overflow-x: hidden;
        padding-bottom: 3rem;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .container { max-width: 72rem; margin: 0 auto; position: relative; z-index: 1; }
    .container.wide { max-width: 80rem; }
    h1, h2, h3 { font-family: Georgia, "Times New Roman", serif; }

    .reveal {
        transform: translateY(2rem);
        opacity: 0;
        transition: transform 700ms cubic-bezier(0.2, 0.8, 0.2, 1), opacity 700ms cubic-bezier(0.2, 0.8, 0.2, 1);
    }
    .reveal.revealed { transform: translateY(0); opacity: 1; }

    .nav-wrapper {
        position: fixed; top: 1.5rem; left: 0; width: 100%;
        z-index: 50; display: flex; justify-content: center; padding: 0 1rem;
    }
    .top-nav {
        display: flex; align-items: center; justify-content: space-between;
        width: 100%; max-width: 80rem; padding: 0.75rem 1.5rem; border-radius: 9999px;
        background: transparent; transition: all 300ms ease-out;
    }
    .top-nav.scrolled {
        max-width: 64rem; background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(24px); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.5);
    }
    .nav-logo {
        font-family: Georgia, serif; font-weight: 900; font-size: 1.25rem;
        display: flex; align-items: center; gap: 0.5rem; color: #111; text-decoration: none;
    }
    .nav-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #dc2626; }
    .nav-links {
        display: flex; background: rgba(243, 244, 246, 0.5);
        padding: 0.25rem; border-radius: 9999px;
    }
    .nav-link {
        padding: 0.5rem 1.25rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 700;
        text-transform: uppercase; color: #6b7280; text-decoration: none; transition: all 300ms;
    }
    .nav-link:hover { color: #000; }
    .nav-link.active { color: #fff; background: #000; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .burger-menu {
        display: none; padding: 0.5rem 0.8rem; background: #000; color: #fff;
        border: none; border-radius: 9999px; z-index: 60;
    }
    .mobile-menu {
        position: fixed; inset: 0; z-index: 40; background: #FAFAFA;
        display: flex; align-items: center; justify-content: center;
        opacity: 0; transform: translateY(100%); pointer-events: none;
        transition: all 500ms ease-in-out;
    }
    .mobile-menu.mobile-menu-open { opacity: 1; transform: translateY(0); pointer-events: auto; }
    .mobile-menu-links { text-align: center; display: flex; flex-direction: column; gap: 2rem; }
    .mobile-menu-link {
        font-family: Georgia, serif; font-size: 3rem; font-weight: 700;
        text-transform: uppercase; color: #111; text-decoration: none;
    }
    .mobile-menu-link:hover { color: #dc2626; }

    .hero {
        position: relative; min-height: 100vh; padding: 8rem 1rem 5rem;
        display: flex; flex-direction: column; justify-content: center; overflow: hidden;
    }
    .hero-glow {
        position: absolute; top: 50%; left: 50%; width: 800px; height: 800px;
        transform: translate(-50%, -50%); border-radius: 50%;
        background: rgba(220, 38, 38, 0.05); filter: blur(120px); pointer-events: none;
    }
    .hero-kicker { display: flex; gap: 1.5rem; margin-bottom: 3rem; flex-wrap: wrap; }
    .kicker-accent, .kicker-muted {
        font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.2em;
    }
    .kicker-accent { color: #dc2626; border-bottom: 1px solid #dc2626; padding-bottom: 0.25rem; }
    .kicker-muted { color: #9ca3af; }
    .hero-title { font-size: clamp(3.75rem, 10vw, 9rem); line-height: 0.9; font-weight: 500; margin-bottom: 3rem; }
    .hero-title-soft { font-style: italic; font-weight: 300; color: #9ca3af; }
    .hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
    .hero-image { position: relative; overflow: hidden; border-radius: 1rem; }
    .hero-image img { width: 100%; height: 500px; object-fit: cover; transition: transform 1.5s cubic-bezier(0.25, 1, 0.5, 1); }
    .hero-image:hover img { transform: scale(1.1); }
    .hero-badge {
        position: absolute; bottom: 1.5rem; left: 1.5rem; background: rgba(255, 255, 255, 0.9);
        padding: 0.75rem 1.5rem; border-radius: 9999px; display: flex; align-items: center; gap: 0.5rem;
        font-size: 0.75rem; font-weight: 700; text-transform: uppercase;
    }
    .pulse-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #22c55e; animation: pulse 2s infinite; }
    @keyframes pulse { 50% { opacity: 0.5; } }
    .hero-copy { display: flex; flex-direction: column; justify-content: space-between; padding: 1.5rem 0; }
    .hero-copy p { font-size: 1.5rem; font-weight: 300; line-height: 1.6; color: #4b5563; }
    .hero-copy strong { color: #000; font-family: Georgia, serif; font-weight: 400; }
    .hero-cta {
        align-self: flex-start; margin-top: 3rem; padding: 1rem 2rem; background: #111; color: #fff;
        border-radius: 9999px; text-decoration: none; font-weight: 500; transition: background 500ms;
    }
    .hero-cta:hover { background: #dc2626; }

    .studio { padding: 8rem 1rem; background: #fff; }
    .section-header {
        display: flex; justify-content: space-between; align-items: flex-end;
        margin-bottom: 5rem; padding-bottom: 2rem; border-bottom: 1px solid #f3f4f6;
    }
    .section-header h2 { font-size: 3.75rem; }
    .section-header-meta { text-align: right; }
    .meta-label { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; color: #9ca3af; letter-spacing: 0.1em; }
    .meta-value { font-size: 1.25rem; font-weight: 500; }
    .steps-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .step {
        height: 100%; padding: 2rem; border: 1px solid #f3f4f6; border-radius: 0.75rem;
        background: #FAFAFA; transition: all 500ms;
    }
    .step:hover { border-color: #000; background: #fff; }
    .step h3 { font-size: 1.5rem; margin-bottom: 1rem; }
    .step p { color: #6b7280; font-weight: 300; line-height: 1.6; }
    .step-icon { display: block; width: 2rem; height: 2rem; margin-bottom: 1.5rem; color: #9ca3af; font-style: normal; }
    .icon-award::before { content: "🏆"; }
    .icon-brush::before { content: "🖌"; }
    .icon-shield::before { content: "🛡"; }

    .portfolio { padding: 8rem 1rem; background: #111; color: #FAFAFA; }
    .portfolio-header { text-align: center; margin-bottom: 6rem; }
    .portfolio-header h2 { font-size: clamp(3rem, 8vw, 6rem); margin-bottom: 1.5rem; }
    .portfolio-header p { color: #9ca3af; max-width: 36rem; margin: 0 auto; font-weight: 300; }
    .gallery-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
    .gallery-tile { position: relative; display: block; overflow: hidden; border-radius: 0.5rem; }
    .gallery-tile-portrait { aspect-ratio: 4 / 5; }
    .gallery-tile-tall { height: 100%; }
    .gallery-grid > .reveal { height: 100%; }
    .gallery-grid > .reveal:nth-child(2) { grid-row: span 2; }
    .gallery-tile img {
        width: 100%; height: 100%; object-fit: cover; filter: grayscale(1);
        transition: transform 1000ms, filter 1000ms;
    }
    .gallery-tile:hover img { transform: scale(1.05); filter: grayscale(0); }
    .gallery-overlay {
        position: absolute; inset: 0; background: rgba(0, 0, 0, 0.4); opacity: 0;
        display: flex; align-items: center; justify-content: center; transition: opacity 500ms;
    }
    .gallery-tile:hover .gallery-overlay { opacity: 1; }
    .gallery-button {
        background: #fff; color: #000; padding: 0.75rem 1.5rem; border-radius: 9999px;
        font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em;
    }

    .contact { min-height: 100vh; display: flex; align-items: center; padding: 5rem 1rem; }
    .contact-card {
        display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; background: #fff;
        border-radius: 3rem; padding: 4rem; box-shadow: 0 25px 50px rgba(229, 231, 235, 0.5);
    }
    .contact-info h2 { font-size: 3rem; line-height: 1.2; }
    .contact-lead { color: #6b7280; margin-top: 1.5rem; }
    .contact-item { display: flex; align-items: center; gap: 1rem; margin-top: 1.5rem; color: inherit; text-decoration: none; }
    .contact-icon {
        width: 3rem; height: 3rem; border-radius: 50%; background: #f9fafb;
        display: flex; align-items: center; justify-content: center; transition: background 300ms;
    }
    .contact-item:hover .contact-icon { background: #dc2626; color: #fff; }
    .contact-form { display: flex; flex-direction: column; gap: 2rem; }
    .form-field label { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; color: #9ca3af; }
    .form-field input, .form-field textarea {
        width: 100%; background: transparent; border: none; border-bottom: 1px solid #e5e7eb;
        padding: 1rem 0; font-size: 1.25rem; resize: none; outline: none;
    }
    .form-field input:focus, .form-field textarea:focus { border-color: #000; }
    .hidden { display: none; }
    .file-label { display: flex; gap: 0.75rem; padding: 1rem 0; cursor: pointer; color: #9ca3af; font-weight: 500; }
    .file-label:hover { color: #000; }
    .file-label.file-selected { color: #16a34a; }
    .form-error { color: #dc2626; font-size: 0.875rem; }
    .contact-submit {
        width: 100%; background: #111; color: #fff; padding: 1.5rem; border: none; border-radius: 1rem;
        font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; cursor: pointer; transition: background 300ms;
    }
    .contact-submit:hover { background: #dc2626; }

    .site-footer { background: #fff; padding: 3rem 0; text-align: center; border-top: 1px solid #f3f4f6; }
    .site-footer h2 { font-size: 2.25rem; font-weight: 900; margin-bottom: 1.5rem; }
    .footer-links { display: flex; justify-content: center; gap: 1.5rem; margin-bottom: 2rem; }
    .footer-link { color: #6b7280; text-decoration: none; text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.875rem; }
    .footer-link:hover { color: #dc2626; }
    .footer-credit { color: #9ca3af; font-size: 0.75rem; }
    .footer-credit a { color: #000; font-weight: 700; }

    .dev-popup {
        position: fixed; bottom: 1rem; right: 1rem; z-index: 100; max-width: 20rem; width: 100%;
        transform: translateY(2.5rem); opacity: 0; transition: all 700ms;
    }
    .dev-popup.dev-popup-visible { transform: translateY(0); opacity: 1; }
    .dev-popup-card {
        position: relative; background: rgba(23, 23, 23, 0.95); border: 1px solid #404040;
        border-radius: 0.5rem; padding: 1rem; color: #fff;
    }
    .dev-popup-close { position: absolute; top: 0.5rem; right: 0.5rem; background: none; border: none; color: #737373; cursor: pointer; }
    .dev-popup-close:hover { color: #fff; }
    .dev-popup-kicker { font-size: 10px; text-transform: uppercase; letter-spacing: 0.1em; color: #a3a3a3; font-weight: 700; }
    .dev-popup-pitch { color: #a3a3a3; font-size: 0.75rem; line-height: 1.6; margin: 0.5rem 0 0.75rem; }
    .dev-popup-portfolio { color: #818cf8; font-size: 0.75rem; font-weight: 700; }
    .dev-popup-contacts { display: flex; gap: 0.75rem; margin-top: 0.5rem; font-size: 10px; }
    .dev-popup-contacts a { color: #737373; }

    @media (max-width: 768px) {
        .nav-links { display: none; }
        .burger-menu { display: block; }
        .hero-grid, .steps-grid, .gallery-grid, .contact-card { grid-template-columns: 1fr; }
        .gallery-grid > .reveal:nth-child(2) { grid-row: auto; }
        .section-header-meta { display: none; }
        .contact-card { padding: 2rem; border-radius: 2rem; }
    }
"#;
