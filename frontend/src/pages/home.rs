use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact::ContactDialog;
use crate::components::faq::FaqList;
use crate::components::reveal::Reveal;
use crate::components::stats::CommunityStats;
use crate::config;
use crate::content::{FEATURES, FOUNDER, WHY_CHOOSE_US};
use crate::state::ContactModal;

fn stagger(index: usize) -> u32 {
    index as u32 * config::STAGGER_STEP_MS
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <Reveal class="hero-content">
                <h1>
                    {"Gear Up for "}
                    <span class="accent">{"Success:"}</span>
                    {" Your Ultimate Preparation Hub!"}
                </h1>
                <p class="hero-subtitle">
                    {"Comprehensive resources, dynamic site sections, and real-time user insights—all in one place."}
                </p>
            </Reveal>
        </header>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features">
            <Reveal class="section-heading">
                <h2>{"Our Features"}</h2>
                <p>{"Discover our diverse site sections and interactive tools."}</p>
            </Reveal>
            <div class="features-grid">
                { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                    <Reveal key={feature.title} delay_ms={stagger(index)}>
                        <a href="#" class="feature-link">
                            <div class="feature-card">
                                <div class={classes!("feature-icon", feature.icon.class())} aria-hidden="true">
                                    {feature.icon.glyph()}
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </a>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(WhyChooseUs)]
fn why_choose_us() -> Html {
    html! {
        <section class="why-us">
            <Reveal class="section-heading">
                <h2>{"Why choose us?"}</h2>
                <p class="muted">{"Unlock Your Potential with Our Comprehensive Learning Approach"}</p>
            </Reveal>
            <div class="why-grid">
                { for WHY_CHOOSE_US.iter().enumerate().map(|(index, item)| html! {
                    <Reveal key={item.id} delay_ms={stagger(index)}>
                        <div class="why-card">
                            <h3 class="why-id">{item.id}</h3>
                            <h4>{item.title}</h4>
                            <p class="muted">{item.text}</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(MeetFounder)]
fn meet_founder() -> Html {
    html! {
        <section class="founder-section">
            <h2>{"Meet Our Founder"}</h2>
            <Reveal>
                <div class="founder-card">
                    <div class="founder-info">
                        <h1>{FOUNDER.name}</h1>
                        { for FOUNDER.bio.iter().map(|line| html! { <p class="muted">{*line}</p> }) }
                        <div class="founder-links">
                            { for FOUNDER.links.iter().map(|link| {
                                if link.opens_new_tab() {
                                    html! {
                                        <a href={link.href} target="_blank" rel="noopener noreferrer">
                                            <img src={link.icon_src} alt={link.label} class="social-icon" />
                                        </a>
                                    }
                                } else {
                                    html! {
                                        <a href={link.href}>
                                            <img src={link.icon_src} alt={link.label} class="social-icon" />
                                        </a>
                                    }
                                }
                            }) }
                        </div>
                    </div>
                    <div class="founder-photo">
                        <img src={FOUNDER.photo_src} alt="Founder" />
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StillHaveQuestionsProps {
    on_get_in_touch: Callback<MouseEvent>,
}

#[function_component(StillHaveQuestions)]
fn still_have_questions(props: &StillHaveQuestionsProps) -> Html {
    html! {
        <section class="cta-section">
            <Reveal class="cta-content">
                <h2>{"Still have questions?"}</h2>
                <p>{"Can't find the answer you're looking for? Please chat to our friendly team."}</p>
                <button class="cta-button" onclick={props.on_get_in_touch.clone()}>
                    {"Get in Touch"}
                </button>
            </Reveal>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let modal = use_state_eq(ContactModal::default);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening contact modal");
            modal.set(modal.opened());
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| {
            info!("Closing contact modal");
            modal.set(modal.closed());
        })
    };

    html! {
        <div class="landing-page">
            <Hero />
            <Features />
            <WhyChooseUs />
            <CommunityStats />
            <MeetFounder />
            <FaqList />
            <StillHaveQuestions on_get_in_touch={open_modal} />
            {
                if modal.is_open() {
                    html! { <ContactDialog on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                }

                .reveal.entered {
                    opacity: 1;
                    transform: none;
                }

                .muted {
                    color: #9ca3af;
                }

                .hero {
                    padding: 8rem 1rem 5rem;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .hero .accent {
                    color: #dc2626;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                }

                .features,
                .why-us,
                .stats-section,
                .founder-section,
                .faq-section,
                .cta-section {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-heading h2,
                .founder-section h2,
                .faq-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }

                .features-grid,
                .why-grid,
                .stats-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .feature-link {
                    display: block;
                    text-decoration: none;
                    color: inherit;
                }

                .feature-card,
                .why-card,
                .stat-card,
                .founder-card {
                    background: #ffffff;
                    border: 2px solid transparent;
                    border-radius: 12px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    padding: 2rem;
                    transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
                }

                .feature-card:hover,
                .why-card:hover,
                .stat-card:hover,
                .founder-card:hover {
                    transform: scale(1.05);
                    border-color: #2563eb;
                }

                .feature-card:hover {
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .feature-card h3,
                .feature-card p {
                    text-align: center;
                }

                .feature-icon {
                    display: flex;
                    justify-content: center;
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    color: #3b82f6;
                }

                .why-id {
                    color: #2563eb;
                    font-size: 1.25rem;
                    font-weight: 600;
                }

                .stats-content {
                    text-align: center;
                }

                .stats-content h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .stat-value.instagram {
                    color: #db2777;
                }

                .stat-value.linkedin {
                    color: #2563eb;
                }

                .stat-label {
                    margin-top: 1rem;
                    font-size: 1.25rem;
                }

                .founder-card {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .founder-info {
                    padding: 1.5rem;
                    text-align: center;
                }

                .founder-info h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .founder-links {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                .social-icon {
                    width: 2rem;
                    height: 2rem;
                }

                .founder-photo img {
                    width: 16rem;
                    height: 16rem;
                    object-fit: cover;
                    border-radius: 12px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                    padding: 1rem 0;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: inherit;
                }

                .toggle-icon {
                    margin-left: 0.5rem;
                    color: #6b7280;
                }

                .faq-answer {
                    margin-top: 0.5rem;
                    color: #4b5563;
                }

                .cta-content {
                    text-align: center;
                }

                .cta-content h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .cta-content p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                .cta-button {
                    background: #dc2626;
                    color: #ffffff;
                    font-weight: 700;
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 4px;
                    cursor: pointer;
                    transition: background-color 0.3s ease;
                }

                .cta-button:hover {
                    background: #b91c1c;
                }

                .modal-root {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                }

                .modal-overlay {
                    position: absolute;
                    inset: 0;
                    background: #000000;
                    opacity: 0.5;
                }

                .modal-dialog {
                    position: relative;
                    z-index: 10;
                    background: #ffffff;
                    border-radius: 8px;
                    padding: 2rem;
                }

                .modal-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #4b5563;
                }

                .modal-body {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .modal-icon {
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1rem;
                }

                .modal-text {
                    font-size: 1.125rem;
                    margin-bottom: 0.5rem;
                }

                .modal-mail {
                    color: #2563eb;
                }

                .modal-mail:hover,
                .modal-form-link:hover {
                    text-decoration: underline;
                }

                .modal-form-link {
                    color: #4b5563;
                    margin-bottom: 0.5rem;
                    transition: color 0.3s ease;
                }

                .modal-form-link:hover {
                    color: #3b82f6;
                }

                .modal-footer {
                    color: #4b5563;
                }

                @media (prefers-color-scheme: dark) {
                    .landing-page {
                        background: #111827;
                        color: #ffffff;
                    }

                    .feature-card,
                    .why-card,
                    .stat-card,
                    .founder-card,
                    .modal-dialog {
                        background: #1f2937;
                    }

                    .faq-item {
                        border-color: #374151;
                    }

                    .faq-answer,
                    .cta-content p,
                    .modal-form-link,
                    .modal-footer,
                    .modal-close {
                        color: #d1d5db;
                    }
                }

                @media (min-width: 768px) {
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .why-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .stats-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }

                    .founder-card {
                        flex-direction: row;
                    }

                    .founder-info {
                        width: 50%;
                        text-align: left;
                    }

                    .founder-links {
                        justify-content: flex-start;
                    }

                    .founder-photo {
                        width: 50%;
                        display: flex;
                        justify-content: center;
                    }
                }

                @media (min-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cards_stagger_in_order() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(1), config::STAGGER_STEP_MS);
        assert!(stagger(6) > stagger(5));
    }
}
