use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Faq, FAQS};
use crate::state::Accordion;

#[derive(Properties, PartialEq)]
struct FaqRowProps {
    index: usize,
    faq: Faq,
    open: bool,
    glyph: &'static str,
    on_toggle: Callback<usize>,
}

// Every row reveals on its own, so a long list fades in row by row while scrolling.
#[function_component(FaqRow)]
fn faq_row(props: &FaqRowProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <Reveal class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.faq.question}</span>
                <span class="toggle-icon">{props.glyph}</span>
            </button>
            {
                if props.open {
                    html! { <div class="faq-answer">{props.faq.answer}</div> }
                } else {
                    html! {}
                }
            }
        </Reveal>
    }
}

fn faq_rows(accordion: Accordion, on_toggle: &Callback<usize>) -> Html {
    html! {
        <>
            { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                <FaqRow
                    key={index}
                    index={index}
                    faq={*faq}
                    open={accordion.is_open(index)}
                    glyph={accordion.glyph(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </>
    }
}

#[function_component(FaqList)]
pub fn faq_list() -> Html {
    let accordion = use_state_eq(Accordion::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let next = accordion.toggled(index);
            debug!("FAQ {} toggled, open entry now {:?}", index, next.open_index());
            accordion.set(next);
        })
    };

    html! {
        <section class="faq-section">
            <Reveal>
                <h2>{"Frequently Asked Questions"}</h2>
            </Reveal>
            { faq_rows(*accordion, &on_toggle) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[derive(Properties, PartialEq)]
    struct RowsProps {
        clicked: Vec<usize>,
    }

    // The list as it looks after clicking the given rows in order.
    #[function_component(RowsAfterClicks)]
    fn rows_after_clicks(props: &RowsProps) -> Html {
        let accordion = props.clicked.iter().fold(Accordion::default(), |acc, &i| acc.toggled(i));
        faq_rows(accordion, &Callback::noop())
    }

    // Text before the first '&', which the renderer escapes.
    fn answer_text(faq: &Faq) -> &'static str {
        faq.answer.split('&').next().unwrap_or(faq.answer)
    }

    #[test]
    fn list_starts_collapsed() {
        let html = render::<FaqList>(());
        for faq in FAQS.iter() {
            assert!(!html.contains(answer_text(faq)), "answer shown before any click: {}", faq.answer);
        }
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), FAQS.len());
        assert!(!html.contains("−"));
    }

    #[test]
    fn only_clicked_row_shows_its_answer() {
        for i in 0..FAQS.len() {
            let html = render::<RowsAfterClicks>(RowsProps { clicked: vec![i] });
            for (j, faq) in FAQS.iter().enumerate() {
                assert_eq!(html.contains(answer_text(faq)), i == j, "row {} after clicking {}", j, i);
            }
            assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
            assert_eq!(html.matches("−").count(), 1);
            assert_eq!(html.matches(">+<").count(), FAQS.len() - 1);
        }
    }

    #[test]
    fn clicking_another_row_moves_the_answer() {
        let html = render::<RowsAfterClicks>(RowsProps { clicked: vec![0, 3] });
        assert!(!html.contains(answer_text(&FAQS[0])));
        assert!(html.contains(answer_text(&FAQS[3])));
    }

    #[test]
    fn clicking_open_row_again_collapses_it() {
        let html = render::<RowsAfterClicks>(RowsProps { clicked: vec![1, 1] });
        assert!(!html.contains(answer_text(&FAQS[1])));
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 0);
    }

    #[test]
    fn open_row_markup() {
        let html = render::<FaqRow>(FaqRowProps {
            index: 4,
            faq: FAQS[4],
            open: true,
            glyph: "−",
            on_toggle: Callback::noop(),
        });
        assert!(html.contains(FAQS[4].question));
        assert!(html.contains(FAQS[4].answer));
        assert!(html.contains("class=\"faq-answer\""));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains(">−<"));
    }
}
